pub use self::gnss::PositionFix;

mod gnss;
