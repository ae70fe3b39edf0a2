/// Receives coarse progress and user-facing notices from a generation run.
/// Both calls are advisory: a failing sink never stops generation.
pub trait ProgressSink {
    fn report_progress(&mut self, percent: i32) -> anyhow::Result<()>;
    fn notify(&mut self, title: &str, message: &str);
}

pub trait SettingsReader {
    fn border_reconciliation(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report_progress(&mut self, percent: i32) -> anyhow::Result<()> {
        log::info!("generating: {percent}%");
        Ok(())
    }

    fn notify(&mut self, title: &str, message: &str) {
        log::info!("{title}\n{message}");
    }
}

#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub reports: Vec<i32>,
    pub notices: Vec<(String, String)>,
}

impl ProgressSink for RecordingProgress {
    fn report_progress(&mut self, percent: i32) -> anyhow::Result<()> {
        self.reports.push(percent);
        Ok(())
    }

    fn notify(&mut self, title: &str, message: &str) {
        self.notices.push((title.to_string(), message.to_string()));
    }
}
