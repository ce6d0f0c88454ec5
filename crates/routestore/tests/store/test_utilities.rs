use routestore::RouteData;
use uuid::Uuid;

/// Generate a unique test ID for isolating test data
pub fn generate_test_id() -> String {
    Uuid::new_v4().to_string().replace('-', "")
}

/// Create a temporary directory for testing using tempdir()
pub fn create_test_dir(prefix: &str) -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix(&format!("routestore_{prefix}_"))
        .tempdir()
        .expect("Failed to create temporary directory")
}

/// Create a unique route path for testing
pub fn create_test_path(prefix: &str) -> String {
    let test_id = generate_test_id();
    format!("/{prefix}_route_{test_id}")
}

/// Build a `RouteData` fixture from a JSON object literal
pub fn route_data(value: serde_json::Value) -> RouteData {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("route data fixture must be a JSON object, got {other}"),
    }
}

/// Common test configuration
pub struct TestConfig {
    pub temp_dir: tempfile::TempDir,
}

impl TestConfig {
    pub fn new(prefix: &str) -> Self {
        // No-op when test-log has already installed a subscriber
        routestore::telemetry::init();

        Self {
            temp_dir: create_test_dir(prefix),
        }
    }

    /// Path for the external store's database inside the temp dir
    pub fn db_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("routes.db")
    }
}

// TempDir automatically cleans up on drop, no manual cleanup needed
