/// Development utilities module
///
/// Only compiled with the `development` feature; provides a mock data
/// provider so the TUI and commands can run without network access.
pub mod mock_client;

pub use mock_client::MockClient;
