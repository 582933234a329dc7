use tokio::runtime::Runtime;

/// Creates a lightweight single-threaded Tokio runtime
///
/// Every like operation is a single awaited round-trip, so the current_thread
/// scheduler is all the CLI needs.
///
/// Returns `Ok(Runtime)` if successful, or `Err(String)` with error message
pub fn create_runtime() -> Result<Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to create runtime: {}", e))
}
