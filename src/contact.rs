use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "Project Inquiry",
            Self::Message => "Tell me about your project...",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|field| self.get(*field).is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "📨 Send Message",
            Self::Sending => "⏳ Sending...",
            Self::Success => "✅ Message Sent!",
            Self::Error => "❌ Error, Try Again",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Deliver,
    Reset,
}

/// Unique per scheduled timer, so a late callback can't fire the wrong transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    kind: StepKind,
    seq: u64,
}

pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, delay: Duration, step: Step) -> Self::Handle;

    /// Must tolerate handles whose timer already fired.
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("message delivery failed: {0}")]
pub struct DeliveryError(pub String);

pub trait Outbox {
    fn deliver(&mut self, fields: &FormFields) -> Result<(), DeliveryError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedOutbox;

impl Outbox for SimulatedOutbox {
    fn deliver(&mut self, _fields: &FormFields) -> Result<(), DeliveryError> {
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission already in progress (state: {})", .0.as_str())]
    Busy(SubmissionState),
    #[error("required field `{}` is empty", .0.name())]
    MissingField(Field),
    #[error("form has been torn down")]
    TornDown,
}

pub struct ContactForm<S: Scheduler, O = SimulatedOutbox> {
    fields: FormFields,
    state: SubmissionState,
    scheduler: S,
    outbox: O,
    send_delay: Duration,
    reset_delay: Duration,
    pending: Option<(Step, S::Handle)>,
    next_seq: u64,
    torn_down: bool,
}

impl<S: Scheduler> ContactForm<S> {
    pub fn new(scheduler: S, send_delay: Duration, reset_delay: Duration) -> Self {
        Self::with_outbox(scheduler, SimulatedOutbox, send_delay, reset_delay)
    }
}

impl<S: Scheduler, O: Outbox> ContactForm<S, O> {
    pub fn with_outbox(
        scheduler: S,
        outbox: O,
        send_delay: Duration,
        reset_delay: Duration,
    ) -> Self {
        Self {
            fields: FormFields::default(),
            state: SubmissionState::Idle,
            scheduler,
            outbox,
            send_delay,
            reset_delay,
            pending: None,
            next_seq: 0,
            torn_down: false,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.torn_down {
            return Err(SubmitError::TornDown);
        }
        if self.state != SubmissionState::Idle {
            return Err(SubmitError::Busy(self.state));
        }
        if let Some(field) = self.fields.first_missing() {
            return Err(SubmitError::MissingField(field));
        }

        self.state = SubmissionState::Sending;
        self.schedule(StepKind::Deliver, self.send_delay);
        Ok(())
    }

    /// `None` when the step is stale or the form has been torn down.
    pub fn fire(&mut self, step: Step) -> Option<SubmissionState> {
        if self.torn_down {
            return None;
        }
        match self.pending {
            Some((pending, _)) if pending == step => {}
            _ => return None,
        }
        self.pending = None;

        match step.kind {
            StepKind::Deliver => {
                match self.outbox.deliver(&self.fields) {
                    Ok(()) => {
                        self.state = SubmissionState::Success;
                        self.fields = FormFields::default();
                    }
                    Err(_) => self.state = SubmissionState::Error,
                }
                self.schedule(StepKind::Reset, self.reset_delay);
            }
            StepKind::Reset => self.state = SubmissionState::Idle,
        }

        Some(self.state)
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
        if let Some((_, handle)) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn schedule(&mut self, kind: StepKind, delay: Duration) {
        let step = Step {
            kind,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let handle = self.scheduler.schedule(delay, step);
        self.pending = Some((step, handle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const SEND: Duration = Duration::from_millis(1_500);
    const RESET: Duration = Duration::from_millis(3_000);

    #[derive(Default)]
    struct VirtualClock {
        now: Duration,
        next_id: u64,
        timers: Vec<(u64, Duration, Step)>,
        cancelled: Vec<u64>,
    }

    /// Timers that only advance when the test says so.
    #[derive(Clone, Default)]
    struct VirtualScheduler(Rc<RefCell<VirtualClock>>);

    impl VirtualScheduler {
        fn pending(&self) -> usize {
            self.0.borrow().timers.len()
        }

        fn cancelled(&self) -> usize {
            self.0.borrow().cancelled.len()
        }

        fn pop_due(&self, until: Duration) -> Option<Step> {
            let mut clock = self.0.borrow_mut();
            let index = clock
                .timers
                .iter()
                .enumerate()
                .filter(|(_, (_, due, _))| *due <= until)
                .min_by_key(|(_, (id, due, _))| (*due, *id))
                .map(|(index, _)| index)?;
            let (_, due, step) = clock.timers.remove(index);
            clock.now = due;
            Some(step)
        }

        fn advance<O: Outbox>(&self, form: &mut ContactForm<Self, O>, by: Duration) {
            let until = self.0.borrow().now + by;
            while let Some(step) = self.pop_due(until) {
                form.fire(step);
            }
            self.0.borrow_mut().now = until;
        }
    }

    impl Scheduler for VirtualScheduler {
        type Handle = u64;

        fn schedule(&mut self, delay: Duration, step: Step) -> u64 {
            let mut clock = self.0.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.timers.push((id, due, step));
            id
        }

        fn cancel(&mut self, handle: u64) {
            let mut clock = self.0.borrow_mut();
            clock.timers.retain(|(id, _, _)| *id != handle);
            clock.cancelled.push(handle);
        }
    }

    struct FailingOutbox;

    impl Outbox for FailingOutbox {
        fn deliver(&mut self, _fields: &FormFields) -> Result<(), DeliveryError> {
            Err(DeliveryError("mail relay unreachable".to_string()))
        }
    }

    fn filled<O: Outbox>(form: &mut ContactForm<VirtualScheduler, O>) {
        form.set_field(Field::Name, "Ada Lovelace".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Subject, "Engines".to_string());
        form.set_field(Field::Message, "Let's talk about the analytical engine.".to_string());
    }

    fn form() -> (ContactForm<VirtualScheduler>, VirtualScheduler) {
        let clock = VirtualScheduler::default();
        (ContactForm::new(clock.clone(), SEND, RESET), clock)
    }

    #[test]
    fn full_lifecycle_follows_virtual_time() {
        let (mut form, clock) = form();
        filled(&mut form);

        form.submit().expect("complete form submits");
        assert_eq!(form.state(), SubmissionState::Sending);
        assert_eq!(clock.pending(), 1);

        clock.advance(&mut form, Duration::from_millis(1_499));
        assert_eq!(form.state(), SubmissionState::Sending);
        assert_eq!(form.fields().get(Field::Name), "Ada Lovelace");

        clock.advance(&mut form, Duration::from_millis(1));
        assert_eq!(form.state(), SubmissionState::Success);
        assert_eq!(form.fields(), &FormFields::default());
        assert_eq!(clock.pending(), 1);

        clock.advance(&mut form, Duration::from_millis(2_999));
        assert_eq!(form.state(), SubmissionState::Success);

        clock.advance(&mut form, Duration::from_millis(1));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(clock.pending(), 0);
        assert!(form.pending.is_none());
    }

    #[test]
    fn submit_while_sending_is_a_no_op() {
        let (mut form, clock) = form();
        filled(&mut form);
        form.submit().expect("first submit accepted");
        let fields_before = form.fields().clone();

        let result = form.submit();

        assert_eq!(result, Err(SubmitError::Busy(SubmissionState::Sending)));
        assert_eq!(form.state(), SubmissionState::Sending);
        assert_eq!(form.fields(), &fields_before);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn submit_after_success_is_rejected_until_reset() {
        let (mut form, clock) = form();
        filled(&mut form);
        form.submit().expect("submit accepted");
        clock.advance(&mut form, SEND);
        filled(&mut form);

        assert_eq!(
            form.submit(),
            Err(SubmitError::Busy(SubmissionState::Success))
        );

        clock.advance(&mut form, RESET);
        assert_eq!(form.submit(), Ok(()));
    }

    #[test]
    fn empty_required_field_blocks_submission() {
        let (mut form, clock) = form();
        filled(&mut form);
        form.set_field(Field::Subject, String::new());

        assert_eq!(form.submit(), Err(SubmitError::MissingField(Field::Subject)));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn teardown_while_sending_prevents_late_transitions() {
        let (mut form, clock) = form();
        filled(&mut form);
        form.submit().expect("submit accepted");

        form.teardown();
        clock.advance(&mut form, Duration::from_secs(10));

        assert_eq!(form.state(), SubmissionState::Sending);
        assert_eq!(form.fields().get(Field::Email), "ada@example.com");
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.cancelled(), 1);
    }

    #[test]
    fn teardown_is_idempotent_and_blocks_new_submissions() {
        let (mut form, clock) = form();
        filled(&mut form);
        form.submit().expect("submit accepted");
        clock.advance(&mut form, SEND);

        form.teardown();
        form.teardown();

        assert_eq!(clock.cancelled(), 1);
        assert_eq!(form.submit(), Err(SubmitError::TornDown));
    }

    #[test]
    fn teardown_after_success_cancels_the_reset_timer() {
        let (mut form, clock) = form();
        filled(&mut form);
        form.submit().expect("submit accepted");
        let deliver = clock.pop_due(SEND).expect("deliver timer due");
        assert_eq!(form.fire(deliver), Some(SubmissionState::Success));
        let (reset, _) = form.pending.expect("reset timer scheduled");

        form.teardown();
        clock.advance(&mut form, RESET);

        assert_eq!(form.state(), SubmissionState::Success);
        assert_eq!(clock.pending(), 0);
        assert_eq!(form.fire(reset), None);
        assert_eq!(form.state(), SubmissionState::Success);
    }

    #[test]
    fn teardown_with_nothing_pending_cancels_nothing() {
        let (mut form, clock) = form();

        form.teardown();

        assert_eq!(clock.cancelled(), 0);
    }

    #[test]
    fn stale_steps_are_ignored() {
        let (mut form, clock) = form();
        filled(&mut form);
        form.submit().expect("submit accepted");
        let deliver = clock.pop_due(SEND).expect("deliver timer due");
        assert_eq!(deliver.kind, StepKind::Deliver);
        assert_eq!(form.fire(deliver), Some(SubmissionState::Success));

        assert_eq!(form.fire(deliver), None);
        assert_eq!(form.state(), SubmissionState::Success);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn failed_delivery_keeps_fields_and_resets_like_success() {
        let clock = VirtualScheduler::default();
        let mut form = ContactForm::with_outbox(clock.clone(), FailingOutbox, SEND, RESET);
        filled(&mut form);
        form.submit().expect("submit accepted");

        clock.advance(&mut form, SEND);
        assert_eq!(form.state(), SubmissionState::Error);
        assert_eq!(form.fields().get(Field::Subject), "Engines");

        clock.advance(&mut form, RESET);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.pending.is_none());
    }

    #[test]
    fn button_labels_follow_state() {
        assert_eq!(SubmissionState::Idle.button_label(), "📨 Send Message");
        assert_eq!(SubmissionState::Sending.button_label(), "⏳ Sending...");
        assert_eq!(SubmissionState::Success.button_label(), "✅ Message Sent!");
        assert_eq!(SubmissionState::Error.button_label(), "❌ Error, Try Again");
    }

    mod tokio_timers {
        use super::*;
        use tokio::sync::mpsc;
        use tokio::task::JoinHandle;
        use tokio::time::{timeout, Instant};

        struct TokioScheduler {
            tx: mpsc::UnboundedSender<Step>,
        }

        impl Scheduler for TokioScheduler {
            type Handle = JoinHandle<()>;

            fn schedule(&mut self, delay: Duration, step: Step) -> JoinHandle<()> {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(step);
                })
            }

            fn cancel(&mut self, handle: JoinHandle<()>) {
                handle.abort();
            }
        }

        fn tokio_form() -> (ContactForm<TokioScheduler>, mpsc::UnboundedReceiver<Step>) {
            let (tx, rx) = mpsc::unbounded_channel();
            let mut form = ContactForm::new(TokioScheduler { tx }, SEND, RESET);
            for field in Field::ALL {
                form.set_field(field, format!("{} value", field.name()));
            }
            (form, rx)
        }

        #[tokio::test(start_paused = true)]
        async fn timers_fire_after_configured_delays() {
            let (mut form, mut rx) = tokio_form();
            let start = Instant::now();

            form.submit().expect("submit accepted");
            assert_eq!(form.state(), SubmissionState::Sending);

            let deliver = rx.recv().await.expect("deliver step");
            assert!(start.elapsed() >= SEND && start.elapsed() < SEND + RESET);
            assert_eq!(form.fire(deliver), Some(SubmissionState::Success));

            let reset = rx.recv().await.expect("reset step");
            assert!(start.elapsed() >= SEND + RESET);
            assert_eq!(form.fire(reset), Some(SubmissionState::Idle));
        }

        #[tokio::test(start_paused = true)]
        async fn aborted_timer_never_delivers_after_teardown() {
            let (mut form, mut rx) = tokio_form();
            form.submit().expect("submit accepted");

            form.teardown();
            let late = timeout(Duration::from_secs(30), rx.recv()).await;

            assert!(late.is_err());
            assert_eq!(form.state(), SubmissionState::Sending);
        }
    }
}
