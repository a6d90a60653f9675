use finder::messages::{Locale, MessageId, Messages};
use finder::models::{ForecastEntry, RepositorySummary, WeatherSnapshot};
use finder::view::repos::render_repo_card;
use finder::view::weather::{render_current, render_forecast, render_recent, round_temperature};
use finder::view::{
    escape_html, format_number, render_page, ErrorBanner, RenderMode, RepoCardView, SearchDocument,
    WeatherDocument,
};

fn summary(index: usize) -> RepositorySummary {
    RepositorySummary {
        owner: format!("owner-{}", index),
        name: format!("repo-{}", index),
        description: Some(format!("Description {}", index)),
        star_count: 1530,
        fork_count: 12,
        primary_language: Some("Rust".to_string()),
        url: format!("https://github.com/owner-{0}/repo-{0}", index),
    }
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1000), "1.0k");
    assert_eq!(format_number(1530), "1.5k");
    assert_eq!(format_number(25_000), "25.0k");
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<script>alert("x & 'y'")</script>"#),
        "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn test_card_escapes_every_field() {
    let repo = RepositorySummary {
        owner: "<b>evil</b>".to_string(),
        name: "x&y".to_string(),
        description: Some("<img src=x onerror=alert(1)>".to_string()),
        star_count: 5,
        fork_count: 0,
        primary_language: Some("<i>".to_string()),
        url: "https://github.com/a?b=<c>".to_string(),
    };
    let html = render_repo_card(&RepoCardView::new(&repo, &Messages::default()));

    assert!(!html.contains("<img"));
    assert!(!html.contains("<b>"));
    assert!(!html.contains("<i>"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(html.contains("&lt;b&gt;evil&lt;/b&gt;/x&amp;y"));
    assert!(html.contains(r#"href="https://github.com/a?b=&lt;c&gt;""#));
}

#[test]
fn test_card_rejects_script_links() {
    let repo = RepositorySummary {
        url: "javascript:alert(1)".to_string(),
        ..summary(0)
    };
    let html = render_repo_card(&RepoCardView::new(&repo, &Messages::default()));
    assert!(html.contains(r##"href="#""##));
}

#[test]
fn test_card_placeholder_description_and_counts() {
    let repo = RepositorySummary {
        description: None,
        primary_language: None,
        ..summary(1)
    };
    let view = RepoCardView::new(&repo, &Messages::default());
    assert_eq!(view.description, "No description available.");
    assert_eq!(view.stars, "1.5k");
    assert_eq!(view.forks, "12");

    let html = render_repo_card(&view);
    assert!(!html.contains("language-badge"));
}

#[test]
fn test_replace_renders_one_card_per_item() {
    let messages = Messages::default();
    let mut doc = SearchDocument::default();
    let repos: Vec<_> = (0..10).map(summary).collect();

    doc.show_loading(&messages);
    doc.render_results(RenderMode::Replace, Some(repos.as_slice()), true, &messages);

    assert_eq!(doc.card_count(), 10);
    assert_eq!(doc.results.len(), 10);
    assert!(doc.load_more);
    assert!(doc.render_load_more(&messages).contains("Load More Results"));
}

#[test]
fn test_append_keeps_previous_cards() {
    let messages = Messages::default();
    let mut doc = SearchDocument::default();
    let first: Vec<_> = (0..10).map(summary).collect();
    let second: Vec<_> = (10..15).map(summary).collect();

    doc.render_results(RenderMode::Replace, Some(first.as_slice()), true, &messages);
    doc.render_results(RenderMode::Append, Some(second.as_slice()), false, &messages);

    assert_eq!(doc.card_count(), 15);
    assert!(!doc.load_more);
    assert!(doc.render_load_more(&messages).is_empty());
}

#[test]
fn test_null_payload_clears_control() {
    let messages = Messages::default();
    let mut doc = SearchDocument::default();
    let repos: Vec<_> = (0..10).map(summary).collect();
    doc.render_results(RenderMode::Replace, Some(repos.as_slice()), true, &messages);

    doc.render_results(RenderMode::Append, None, false, &messages);
    assert_eq!(doc.card_count(), 10);
    assert!(!doc.load_more);

    doc.render_results(RenderMode::Replace, None, false, &messages);
    assert_eq!(doc.card_count(), 0);
    assert!(doc.results.is_empty());
}

#[test]
fn test_empty_payload_shows_empty_state() {
    let messages = Messages::default();
    let empty: Vec<RepositorySummary> = Vec::new();
    let mut doc = SearchDocument::default();

    doc.render_results(RenderMode::Replace, Some(empty.as_slice()), true, &messages);
    assert_eq!(doc.card_count(), 0);
    assert!(!doc.load_more);
    assert!(doc.render_results_html().contains("No repositories found."));

    let repos: Vec<_> = (0..10).map(summary).collect();
    doc.render_results(RenderMode::Replace, Some(repos.as_slice()), true, &messages);
    doc.render_results(RenderMode::Append, Some(empty.as_slice()), true, &messages);
    assert_eq!(doc.card_count(), 10);
    assert!(!doc.load_more);
    assert!(doc.render_results_html().contains("No more repositories."));
}

#[test]
fn test_error_banner() {
    let mut banner = ErrorBanner::default();
    assert!(banner.render().is_empty());

    banner.show("first");
    banner.show("<second>");
    assert_eq!(banner.messages().to_vec(), vec!["<second>".to_string()]);
    banner.push("third");
    let html = banner.render();
    assert!(html.contains("&lt;second&gt;"));
    assert!(html.contains("third"));

    banner.clear();
    assert!(banner.is_empty());
}

#[test]
fn test_round_temperature() {
    assert_eq!(round_temperature(21.6), 22);
    assert_eq!(round_temperature(21.4), 21);
    assert_eq!(round_temperature(2.5), 3);
    assert_eq!(round_temperature(-2.5), -2);
}

#[test]
fn test_render_current_weather() {
    let snapshot = WeatherSnapshot {
        city_name: "Tokyo".to_string(),
        country: "JP".to_string(),
        condition_main: "Clear".to_string(),
        description: "clear sky".to_string(),
        temperature_c: 21.6,
        humidity_pct: 40,
        wind_speed: 3.1,
    };
    let html = render_current(&snapshot, &Messages::default());

    assert!(html.contains("<h2>Tokyo, JP</h2>"));
    assert!(html.contains("clear sky ☀️"));
    assert!(html.contains("22°C"));
    assert!(html.contains("Humidity: 40% | Wind: 3.1 m/s"));
}

#[test]
fn test_render_forecast_and_recent() {
    let entries = vec![
        ForecastEntry {
            day_label: "Mon".to_string(),
            condition_main: "Rain".to_string(),
            temperature_c: 9.7,
        },
        ForecastEntry {
            day_label: "Tue".to_string(),
            condition_main: "Fog".to_string(),
            temperature_c: 11.2,
        },
    ];
    let html = render_forecast(&entries, &Messages::default());
    assert_eq!(html.matches("forecast-item").count(), 2);
    assert!(html.contains("5-Day Forecast"));
    assert!(html.contains("🌧️"));
    assert!(html.contains("🌤️"));

    let recent = render_recent(
        &["tokyo".to_string(), "<paris>".to_string()],
        &Messages::default(),
    );
    assert!(recent.contains(r#"href="/weather/recent/0">tokyo</a>"#));
    assert!(recent.contains(r#"href="/weather/recent/1">&lt;paris&gt;</a>"#));
    assert!(render_recent(&[], &Messages::default()).is_empty());
}

#[test]
fn test_messages_are_localized() {
    let en = Messages::new(Locale::En);
    let ko = Messages::new(Locale::Ko);

    assert_eq!(en.get(MessageId::EmptyQuery), "Please enter a search keyword.");
    assert_ne!(en.get(MessageId::EmptyQuery), ko.get(MessageId::EmptyQuery));
    assert_eq!(ko.locale(), Locale::Ko);
}

#[test]
fn test_page_labels_follow_locale() {
    let search = SearchDocument::default();
    let weather = WeatherDocument::default();

    let en = render_page(&search, &weather, &Messages::new(Locale::En));
    assert_eq!(en.matches(r#"<button type="submit">Search</button>"#).count(), 2);
    assert!(en.contains(r#"lang="en""#));

    let ko = render_page(&search, &weather, &Messages::new(Locale::Ko));
    assert_eq!(ko.matches(r#"<button type="submit">검색</button>"#).count(), 2);
    assert!(!ko.contains(">Search</button>"));
}
