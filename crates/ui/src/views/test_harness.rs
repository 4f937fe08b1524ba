use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::time::fixed_clock;
use services::{
    AppServices, ChapterService, DashboardService, LeaderboardService, QuizConfig,
    QuizFlowService, SessionState,
};
use storage::Storage;

use crate::app::{App, QuizShell};
use crate::context::{UiApp, build_app_context};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizFlowService> {
        self.services.quiz()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn leaderboard(&self) -> Arc<LeaderboardService> {
        self.services.leaderboard()
    }

    fn chapters(&self) -> Arc<ChapterService> {
        self.services.chapters()
    }

    fn history_limit(&self) -> usize {
        self.services.config().history_limit()
    }
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    state: Option<SessionState>,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Renders `QuizShell` from a prepared session, or the full `App` when none is given.
#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.state.clone() {
        Some(state) => rsx! {
            PreparedShell { state }
        },
        None => rsx! {
            App {}
        },
    }
}

#[derive(Props, Clone)]
struct PreparedShellProps {
    state: SessionState,
}

impl PartialEq for PreparedShellProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn PreparedShell(props: PreparedShellProps) -> Element {
    let session = use_signal(|| props.state.clone());
    rsx! { QuizShell { session } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn mock_services(config: QuizConfig) -> AppServices {
    AppServices::new_mock(fixed_clock(), config).expect("mock services")
}

/// Harness over `services`; `prepare` walks a fresh session to the screen under test.
pub fn setup_view_harness(
    services: AppServices,
    prepare: impl FnOnce(&QuizFlowService, &mut SessionState),
) -> ViewHarness {
    let quiz = services.quiz();
    let mut state = quiz.new_session();
    prepare(&quiz, &mut state);
    build(services, Some(state))
}

/// Harness rendering the root `App` component.
pub fn setup_app_harness(services: AppServices) -> ViewHarness {
    build(services, None)
}

pub fn empty_services() -> AppServices {
    AppServices::new(&Storage::empty(), fixed_clock(), QuizConfig::default())
}

fn build(services: AppServices, state: Option<SessionState>) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let dom = VirtualDom::new_with_props(ShellHarness, ShellHarnessProps { app, state });
    ViewHarness { dom, services }
}
