pub use self::cgnsinf::Cgnsinf;
pub use self::simcom::SimcomGnss;

mod cgnsinf;
mod simcom;
