use std::time::Duration;

use dormmeal_ui::DormmealApp;
use dormmeal_ui::state::State;
use egui_kittest::Harness;
use tokio::runtime::Handle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Frames to run after each sleep so finished requests get rendered.
pub const UI_PROPAGATION_FRAMES: usize = 5;

pub async fn start_mock_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, DormmealApp>,
}

impl<'a> TestCtx<'a> {
    /// App wired to `mock_server`.
    ///
    /// The first frame already dispatches the initial fetch, so mount every
    /// mock before calling this.
    pub fn new_app(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri(), Handle::current())
            .expect("mock server url is valid");
        let app = DormmealApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, DormmealApp> {
        &mut self.harness
    }

    /// Gives in-flight requests time to land, then renders.
    pub async fn settle(&mut self) {
        tokio::time::sleep(Duration::from_millis(200)).await;
        for _ in 0..UI_PROPAGATION_FRAMES {
            self.harness.step();
        }
    }
}

pub fn students_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "1",
            "name": "Asha Rao",
            "email": "asha@hostel.edu",
            "roomNumber": "B-204",
            "status": "active",
            "createdAt": "2023-05-10T08:30:00Z",
            "mealsBooked": 32
        },
        {
            "id": "2",
            "name": "Ben Okafor",
            "email": "ben.o@mail.com",
            "roomNumber": "A-110",
            "status": "inactive"
        }
    ])
}

/// Serves `students_json()` on `GET /api/users`.
pub async fn mount_students(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(students_json()))
        .mount(server)
        .await;
}
