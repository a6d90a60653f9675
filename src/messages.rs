//! User-visible text, keyed by message id.
//!
//! Both clients look up every banner, placeholder and label here so the
//! rendering and error paths never carry literal strings of their own.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    EmptyQuery,
    EmptyCity,
    RateLimited,
    ProviderFailure,
    NetworkFailure,
    NoRepositories,
    NoMoreRepositories,
    NoDescription,
    LoadMore,
    Loading,
    CityNotFound,
    ForecastNotFound,
    WeatherRateLimited,
    ForecastHeading,
    Humidity,
    Wind,
    RecentSearches,
    Search,
}

/// Message lookup bound to one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, id: MessageId) -> &'static str {
        match self.locale {
            Locale::En => english(id),
            Locale::Ko => korean(id),
        }
    }
}

fn english(id: MessageId) -> &'static str {
    match id {
        MessageId::EmptyQuery => "Please enter a search keyword.",
        MessageId::EmptyCity => "Please enter a city name",
        MessageId::RateLimited => "⚠️ GitHub rate limit exceeded! Please try again later.",
        MessageId::ProviderFailure => "❌ Failed to fetch data from GitHub.",
        MessageId::NetworkFailure => "❌ Network error. Please check your internet connection.",
        MessageId::NoRepositories => "No repositories found.",
        MessageId::NoMoreRepositories => "No more repositories.",
        MessageId::NoDescription => "No description available.",
        MessageId::LoadMore => "Load More Results",
        MessageId::Loading => "Loading...",
        MessageId::CityNotFound => "City not found",
        MessageId::ForecastNotFound => "Forecast not found",
        MessageId::WeatherRateLimited => "⚠️ Weather rate limit exceeded! Please try again later.",
        MessageId::ForecastHeading => "5-Day Forecast",
        MessageId::Humidity => "Humidity",
        MessageId::Wind => "Wind",
        MessageId::RecentSearches => "Recent searches",
        MessageId::Search => "Search",
    }
}

fn korean(id: MessageId) -> &'static str {
    match id {
        MessageId::EmptyQuery => "검색어를 입력해 주세요.",
        MessageId::EmptyCity => "도시 이름을 입력해 주세요",
        MessageId::RateLimited => "⚠️ GitHub API 요청 한도를 초과했습니다! 잠시 후 다시 시도해 주세요.",
        MessageId::ProviderFailure => "❌ GitHub에서 데이터를 가져오지 못했습니다.",
        MessageId::NetworkFailure => "❌ 네트워크 오류입니다. 인터넷 연결을 확인해 주세요.",
        MessageId::NoRepositories => "저장소를 찾을 수 없습니다.",
        MessageId::NoMoreRepositories => "더 이상 저장소가 없습니다.",
        MessageId::NoDescription => "설명이 없습니다.",
        MessageId::LoadMore => "결과 더 보기",
        MessageId::Loading => "불러오는 중...",
        MessageId::CityNotFound => "도시를 찾을 수 없습니다",
        MessageId::ForecastNotFound => "예보를 찾을 수 없습니다",
        MessageId::WeatherRateLimited => "⚠️ 날씨 API 요청 한도를 초과했습니다! 잠시 후 다시 시도해 주세요.",
        MessageId::ForecastHeading => "5일 예보",
        MessageId::Humidity => "습도",
        MessageId::Wind => "바람",
        MessageId::RecentSearches => "최근 검색",
        MessageId::Search => "검색",
    }
}
