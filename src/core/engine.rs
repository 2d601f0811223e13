use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting report run");

        let raw = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} drivers, {} passengers, {} trips",
            raw.drivers.len(),
            raw.passengers.len(),
            raw.trips.len()
        );

        let fleet = self.pipeline.build(raw)?;
        tracing::info!("Assembled fleet with {} drivers", fleet.drivers().len());

        let output_path = self.pipeline.report(fleet)?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
