use super::weather::render_recent;
use super::{escape_html, SearchDocument, WeatherDocument};
use crate::messages::{Locale, MessageId, Messages};
use crate::models::SortOrder;

fn lang_attr(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "en",
        Locale::Ko => "ko",
    }
}

fn render_sort_options(selected: SortOrder) -> String {
    SortOrder::ALL
        .iter()
        .map(|sort| {
            let marker = if *sort == selected { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, sort.as_str(), marker)
        })
        .collect()
}

fn render_search_panel(doc: &SearchDocument, messages: &Messages) -> String {
    format!(
        concat!(
            r#"<section id="repositories">"#,
            r#"<form method="get" action="/search">"#,
            r#"<input id="searchInput" name="q" type="text" value="{input}">"#,
            r#"<select id="sortSelect" name="sort">{options}</select>"#,
            r#"<button type="submit">{search_label}</button>"#,
            "</form>",
            r#"<div id="errorMessage">{banner}</div>"#,
            r#"<div id="repoList">{results}</div>"#,
            r#"<div id="loadMoreContainer">{load_more}</div>"#,
            "</section>"
        ),
        input = escape_html(&doc.input),
        options = render_sort_options(doc.sort),
        search_label = escape_html(messages.get(MessageId::Search)),
        banner = doc.banner.render(),
        results = doc.render_results_html(),
        load_more = doc.render_load_more(messages),
    )
}

fn render_weather_panel(doc: &WeatherDocument, messages: &Messages) -> String {
    format!(
        concat!(
            r#"<section id="weather">"#,
            r#"<form method="get" action="/weather">"#,
            r#"<input id="cityInput" name="city" type="text" value="{input}">"#,
            r#"<button type="submit">{search_label}</button>"#,
            "</form>",
            r#"<div id="weatherError">{banner}</div>"#,
            r#"<div id="weatherDisplay">{current}</div>"#,
            r#"<div id="forecastDisplay">{forecast}</div>"#,
            r#"<div id="recentSearches">{recent}</div>"#,
            "</section>"
        ),
        input = escape_html(&doc.input),
        search_label = escape_html(messages.get(MessageId::Search)),
        banner = doc.banner.render(),
        current = doc.current.render(messages),
        forecast = doc.forecast.render(messages),
        recent = render_recent(&doc.recent, messages),
    )
}

/// Full page with both panels
pub fn render_page(search: &SearchDocument, weather: &WeatherDocument, messages: &Messages) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="{lang}"><head><meta charset="utf-8"><title>Finder</title></head>"#,
            "<body>{search}{weather}</body></html>"
        ),
        lang = lang_attr(messages.locale()),
        search = render_search_panel(search, messages),
        weather = render_weather_panel(weather, messages),
    )
}
