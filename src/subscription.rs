#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn release_runs_teardown_once() {
        let released = Rc::new(Cell::new(0));
        let mut subscription = {
            let released = released.clone();
            Subscription::new(move || released.set(released.get() + 1))
        };

        assert!(subscription.release.is_some());
        subscription.release();
        subscription.release();
        drop(subscription);

        assert_eq!(released.get(), 1);
    }

    #[test]
    fn drop_releases_unreleased_subscription() {
        let released = Rc::new(Cell::new(false));
        {
            let released = released.clone();
            let _subscription = Subscription::new(move || released.set(true));
        }

        assert!(released.get());
    }

    #[test]
    fn empty_subscription_is_inert() {
        let mut subscription = Subscription::empty();

        assert!(subscription.release.is_none());
        subscription.release();
    }
}
