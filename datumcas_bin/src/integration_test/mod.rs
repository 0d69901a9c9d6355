pub mod pages;

use std::sync::Arc;

use service::clock::MockClockService;
use service_impl::{datetime::DateTimeServiceImpl, template::TemplateServiceImpl};
use time::macros::{date, time};

type TestDateTimeService = DateTimeServiceImpl<MockClockService>;

/// Router state over the real services with the wall clock mocked out.
/// Templates are the real files from the workspace `templates/` directory.
#[derive(Clone)]
pub struct TestState {
    pub date_time_service: Arc<TestDateTimeService>,
    pub template_service: Arc<TemplateServiceImpl>,
}
impl rest::RestStateDef for TestState {
    type DateTimeService = TestDateTimeService;
    type TemplateService = TemplateServiceImpl;

    fn date_time_service(&self) -> Arc<Self::DateTimeService> {
        self.date_time_service.clone()
    }
    fn template_service(&self) -> Arc<Self::TemplateService> {
        self.template_service.clone()
    }
}

pub fn test_state() -> TestState {
    let mut clock_service = MockClockService::new();
    clock_service
        .expect_date_now()
        .returning(|| date!(2024 - 03 - 05));
    clock_service.expect_time_now().returning(|| time!(1:00));

    TestState {
        date_time_service: Arc::new(DateTimeServiceImpl::new(Arc::new(clock_service))),
        template_service: Arc::new(
            TemplateServiceImpl::from_glob("../templates/*.html")
                .expect("Expected workspace templates to load"),
        ),
    }
}
