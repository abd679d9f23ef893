use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub data_dir: PathBuf,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        let data_dir = std::env::var("TOURNAMENT_DATA_DIR")
            .unwrap_or_else(|_| "tournaments".to_string());
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportSettings {
    /// Ranks below this get a medal
    pub podium_size: usize,
    pub medals: Vec<&'static str>,
    pub placements: Vec<&'static str>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            podium_size: 3,
            medals: vec!["🥇", "🥈", "🥉"],
            placements: vec!["1st", "2nd", "3rd"],
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderSettings,
    pub report: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            provider: ProviderSettings::default(),
            report: ReportSettings::default(),
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.provider.data_dir = data_dir.into();
        self
    }
}
