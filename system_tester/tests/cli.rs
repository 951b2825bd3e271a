//!
//! The end-to-end scenarios against the installed generator CLI.
//!
//! The tests need `mkdocs` on the `PATH` and are ignored by default.
//! Run them with `cargo test -- --ignored`.
//!

use std::net::TcpListener;

use docs_system_tester::HealthCheck;
use docs_system_tester::Mkdocs;
use docs_system_tester::Scenario;
use docs_system_tester::ScenarioContext;

///
/// Returns the context against the installed generator.
///
fn context() -> ScenarioContext {
    let address = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Binding");
        listener.local_addr().expect("Local address").to_string()
    };
    let mkdocs = Mkdocs::new(Mkdocs::DEFAULT_EXECUTABLE_NAME.to_owned())
        .expect("`mkdocs` must be on the PATH");
    let health_check = HealthCheck::new(
        HealthCheck::DEFAULT_ATTEMPTS,
        HealthCheck::DEFAULT_BACKOFF,
    )
    .expect("Client building");
    ScenarioContext::new(mkdocs, address, health_check)
}

#[test]
#[ignore = "requires `mkdocs` on the PATH"]
fn new_project() {
    Scenario::New.run(&context()).expect("Scenario");
}

#[test]
#[ignore = "requires `mkdocs` on the PATH"]
fn build() {
    Scenario::Build.run(&context()).expect("Scenario");
}

#[test]
#[ignore = "requires `mkdocs` on the PATH"]
fn build_with_navigation() {
    Scenario::BuildNav.run(&context()).expect("Scenario");
}

#[test]
#[ignore = "requires `mkdocs` on the PATH"]
fn serve() {
    Scenario::Serve.run(&context()).expect("Scenario");
}

