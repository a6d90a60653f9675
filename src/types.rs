use serde::Deserialize;

// GitHub search API response structures
#[derive(Debug, Deserialize)]
pub struct GitHubSearchResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub items: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner: Option<GitHubOwner>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GitHubOwner {
    #[serde(default)]
    pub login: Option<String>,
}

// OpenWeather response structures
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    #[serde(default)]
    pub sys: Option<WeatherSys>,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub main: WeatherMain,
    #[serde(default)]
    pub wind: Option<WeatherWind>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherSys {
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherCondition {
    pub main: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    #[serde(default)]
    pub humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherWind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastSlot>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastSlot {
    pub dt_txt: String,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub main: WeatherMain,
}
