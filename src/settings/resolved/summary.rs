use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", format_summary(config));
}

fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	out.push_str(&format!("  API key: {}\n", config.api.key));
	out.push_str(&format!("  Endpoint: {}\n", config.api.endpoint));
	match config.api.timeout {
		Some(timeout) => out.push_str(&format!("  Timeout: {}s\n", timeout.as_secs())),
		None => out.push_str("  Timeout: none\n"),
	}
	out.push_str(&format!("  Theme: {}\n", config.theme));
	out.push_str(&format!("  Job title: {}\n", or_empty(&config.job_title)));
	out.push_str(&format!("  Location: {}\n", or_empty(&config.location)));
	out.push_str(&format!("  Log level: {}\n", config.logging.level));
	out.push_str(&format!("  Log file: {}\n", config.logging.file.display()));
	out
}

fn or_empty(value: &str) -> &str {
	if value.is_empty() { "(empty)" } else { value }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use jobsearch::logging::LoggingSettings;
	use jobsearch::search::ApiKey;
	use jobsearch::tui::ThemeMode;

	use super::super::ApiSettings;
	use super::*;

	#[test]
	fn summary_redacts_the_key() {
		let config = ResolvedConfig {
			api: ApiSettings {
				key: ApiKey::new("super-secret"),
				endpoint: "https://jsearch.p.rapidapi.com/search".into(),
				timeout: Some(Duration::from_secs(30)),
			},
			theme: ThemeMode::Dark,
			job_title: "Software Engineer".into(),
			location: String::new(),
			logging: LoggingSettings {
				level: "info".into(),
				file: PathBuf::from("/tmp/jobsearch.log"),
			},
		};

		let summary = format_summary(&config);
		assert!(!summary.contains("super-secret"));
		insta::assert_snapshot!(summary, @r"
Effective configuration:
  API key: <redacted>
  Endpoint: https://jsearch.p.rapidapi.com/search
  Timeout: 30s
  Theme: dark
  Job title: Software Engineer
  Location: (empty)
  Log level: info
  Log file: /tmp/jobsearch.log
");
	}
}
