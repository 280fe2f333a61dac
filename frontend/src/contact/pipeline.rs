use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};

use crate::config;

use super::message;
use super::navigator::Navigator;
use super::scheduler::Scheduler;
use super::surface::{BannerId, RenderSurface};
use super::validation::{self, FieldValidationError};

pub const SUCCESS_TEXT: &str = "Mensagem enviada! Aguarde enquanto abrimos o WhatsApp...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    AwaitingSubmission,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent { url: String },
    Rejected(Vec<FieldValidationError>),
}

/// Validates the contact form and hands a valid request over to WhatsApp.
pub struct SubmissionPipeline<S, N, C> {
    surface: Rc<S>,
    navigator: N,
    scheduler: Rc<C>,
    state: Cell<PipelineState>,
}

impl<S, N, C> SubmissionPipeline<S, N, C>
where
    S: RenderSurface + 'static,
    N: Navigator,
    C: Scheduler + 'static,
{
    pub fn new(surface: Rc<S>, navigator: N, scheduler: Rc<C>) -> Self {
        Self {
            surface,
            navigator,
            scheduler,
            state: Cell::new(PipelineState::Idle),
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state.get()
    }

    /// Runs one submission attempt to completion.
    pub fn submit(&self) -> SubmissionOutcome {
        debug!("Contact form submitted while {:?}", self.state());
        self.state.set(PipelineState::AwaitingSubmission);

        let fields = self.surface.read_fields();
        self.surface.clear_errors();

        let outcome = match validation::validate(&fields) {
            Ok(()) => {
                let url = message::deep_link(&message::compose(&fields));
                info!("Opening WhatsApp deep link");
                self.navigator.open(&url);
                self.surface.reset_fields();
                let banner = self.surface.show_banner(SUCCESS_TEXT);
                self.schedule_banner_removal(banner);
                SubmissionOutcome::Sent { url }
            }
            Err(errors) => {
                info!("Contact form rejected with {} invalid field(s)", errors.len());
                for error in &errors {
                    debug!("Field {} failed: {:?}", error.field, error.rule);
                    self.surface.insert_error(error.field, &error.to_string());
                }
                SubmissionOutcome::Rejected(errors)
            }
        };

        self.state.set(PipelineState::Idle);
        outcome
    }

    fn schedule_banner_removal(&self, banner: BannerId) {
        let surface = Rc::clone(&self.surface);
        let scheduler = Rc::clone(&self.scheduler);
        self.scheduler.schedule(
            config::BANNER_DISPLAY_MS,
            Box::new(move || {
                surface.begin_banner_exit(banner);
                scheduler.schedule(
                    config::BANNER_EXIT_MS,
                    Box::new(move || surface.remove_banner(banner)),
                );
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::fields::{Field, FormFields};
    use crate::contact::navigator::MockNavigator;
    use crate::contact::testing::{FakeSurface, ManualScheduler};
    use url::Url;

    fn filled() -> FormFields {
        FormFields {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "47999999999".to_string(),
            message: "Oi".to_string(),
        }
    }

    fn pipeline(
        fields: FormFields,
        navigator: MockNavigator,
    ) -> (
        SubmissionPipeline<FakeSurface, MockNavigator, ManualScheduler>,
        Rc<FakeSurface>,
        Rc<ManualScheduler>,
    ) {
        let surface = Rc::new(FakeSurface::with_fields(fields));
        let scheduler = Rc::new(ManualScheduler::default());
        let pipeline = SubmissionPipeline::new(Rc::clone(&surface), navigator, Rc::clone(&scheduler));
        (pipeline, surface, scheduler)
    }

    fn never_opens() -> MockNavigator {
        let mut navigator = MockNavigator::new();
        navigator.expect_open().never();
        navigator
    }

    fn query(url: &str, key: &str) -> String {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn blank_field_gets_one_annotation_and_no_redirect() {
        for field in Field::ALL {
            let mut fields = filled();
            fields.set(field, "  ");
            let (pipeline, surface, _) = pipeline(fields, never_opens());

            let outcome = pipeline.submit();

            assert!(matches!(outcome, SubmissionOutcome::Rejected(_)));
            assert_eq!(surface.errors(), vec![(field, field.error_text().to_string())]);
            assert!(surface.banners().is_empty());
        }
    }

    #[test]
    fn valid_submission_opens_deep_link() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_open()
            .withf(|url| {
                let text = query(url, "text");
                query(url, "phone") == config::DESTINATION_PHONE
                    && text.contains("*Nome:* Ana")
                    && text.contains("*Email:* ana@x.com")
                    && text.contains("*Telefone:* 47999999999")
                    && text.contains("*Mensagem:* Oi")
            })
            .times(1)
            .return_const(());
        let (pipeline, surface, _) = pipeline(filled(), navigator);

        let outcome = pipeline.submit();

        assert!(matches!(outcome, SubmissionOutcome::Sent { .. }));
        assert_eq!(surface.read_fields(), FormFields::default());
        assert_eq!(surface.banners().len(), 1);
        assert_eq!(surface.banners()[0].1, SUCCESS_TEXT);
        assert!(surface.errors().is_empty());
        assert_eq!(pipeline.state(), PipelineState::Idle);
    }

    #[test]
    fn resubmission_shows_only_latest_errors() {
        let (pipeline, surface, _) = pipeline(FormFields::default(), never_opens());
        pipeline.submit();
        assert_eq!(surface.errors().len(), 4);

        let mut fields = filled();
        fields.email = "not-an-email".to_string();
        surface.fill(fields);
        pipeline.submit();

        assert_eq!(
            surface.errors(),
            vec![(Field::Email, Field::Email.error_text().to_string())]
        );
    }

    #[test]
    fn banner_leaves_after_display_and_is_gone_after_exit() {
        let mut navigator = MockNavigator::new();
        navigator.expect_open().return_const(());
        let (pipeline, surface, scheduler) = pipeline(filled(), navigator);
        pipeline.submit();

        scheduler.advance(2_999);
        assert_eq!(surface.banners().len(), 1);
        assert!(!surface.banners()[0].2);

        scheduler.advance(1);
        assert_eq!(surface.banners().len(), 1);
        assert!(surface.banners()[0].2, "banner should be sliding out");

        scheduler.advance(299);
        assert_eq!(surface.banners().len(), 1);

        scheduler.advance(1);
        assert!(surface.banners().is_empty());
        assert_eq!(scheduler.now(), 3_300);
    }

    #[test]
    fn rapid_successes_each_get_their_own_banner() {
        let mut navigator = MockNavigator::new();
        navigator.expect_open().times(2).return_const(());
        let (pipeline, surface, scheduler) = pipeline(filled(), navigator);

        pipeline.submit();
        scheduler.advance(1_000);
        surface.fill(filled());
        pipeline.submit();
        assert_eq!(surface.banners().len(), 2);

        scheduler.advance(2_300);
        assert_eq!(surface.banners().len(), 1);

        scheduler.advance(1_000);
        assert!(surface.banners().is_empty());
    }
}
