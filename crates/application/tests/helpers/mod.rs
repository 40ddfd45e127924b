mod mock_zone;

pub use mock_zone::MockZone;
