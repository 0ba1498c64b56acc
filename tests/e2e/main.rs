// End-to-end integration tests for the Polyvox HTTP server
//
// These tests boot the full application against wiremock stand-ins for the
// Azure Speech and Azure Text Analytics backends. Each test receives its own
// app instance and mock servers via test-context lifecycle hooks, so the
// suite runs in parallel without conflicts.
//
// Architecture:
// - Two wiremock servers per test (speech synthesis, sentiment analysis)
// - The app is wired exactly as in `main`, with endpoint overrides pointing
//   at the mock servers
// - Tests drive the real HTTP surface: HTML pages, JSON API, health probes

mod test_catalog;
mod test_health;
mod test_sentiment;
