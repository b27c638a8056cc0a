/// File names of a data set. A line named `Wellington_Melling` is read from
/// `Wellington_Melling-stations.data` and `Wellington_Melling-services.data`.
#[derive(Debug, Clone)]
pub struct Config {
    pub stations_file_name: String,
    pub lines_file_name: String,
    pub line_stations_suffix: String,
    pub line_services_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stations_file_name: "stations.data".into(),
            lines_file_name: "train-lines.data".into(),
            line_stations_suffix: "-stations.data".into(),
            line_services_suffix: "-services.data".into(),
        }
    }
}

impl Config {
    pub fn line_stations_file_name(&self, line_name: &str) -> String {
        format!("{line_name}{}", self.line_stations_suffix)
    }

    pub fn line_services_file_name(&self, line_name: &str) -> String {
        format!("{line_name}{}", self.line_services_suffix)
    }
}
