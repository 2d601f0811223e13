use crate::domain::fleet::Fleet;
use crate::domain::records::RawRecords;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn drivers_file(&self) -> &str;
    fn passengers_file(&self) -> &str;
    fn trips_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
}

pub trait Pipeline {
    fn extract(&self) -> Result<RawRecords>;
    fn build(&self, raw: RawRecords) -> Result<Fleet>;
    fn report(&self, fleet: Fleet) -> Result<String>;
}
