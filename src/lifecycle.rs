use std::rc::Rc;

use crate::{
    content::TYPEWRITER_WORDS,
    reveal::{RevealOptions, ScrollAnimator, ScrollReveal, Viewport},
    schedule::Scheduler,
    stats::StatisticSummary,
    store::KeyValueStore,
    typewriter::{Typewriter, TypewriterError, TypewriterLoop, TypewriterState, TypewriterTiming},
};

/// Side effects owned by a mounted Home view: the typewriter timer and the resize listener.
/// Both are released when the lifecycle is unmounted or dropped.
pub struct HomeLifecycle {
    typewriter: TypewriterLoop,
    reveal: ScrollReveal,
}

impl HomeLifecycle {
    pub fn mount(
        scheduler: Rc<dyn Scheduler>,
        animator: Rc<dyn ScrollAnimator>,
        viewport: &dyn Viewport,
        observer: impl Fn(&TypewriterState) + 'static,
    ) -> Result<Self, TypewriterError> {
        Self::mount_with_words(&TYPEWRITER_WORDS, scheduler, animator, viewport, observer)
    }

    pub fn mount_with_words<S: AsRef<str>>(
        words: &[S],
        scheduler: Rc<dyn Scheduler>,
        animator: Rc<dyn ScrollAnimator>,
        viewport: &dyn Viewport,
        observer: impl Fn(&TypewriterState) + 'static,
    ) -> Result<Self, TypewriterError> {
        let machine = Typewriter::new(words, TypewriterTiming::default())?;
        let reveal = ScrollReveal::mount_responsive(animator, RevealOptions::HOME, viewport);
        let typewriter = TypewriterLoop::new(machine, scheduler, observer);
        typewriter.start();
        log::debug!("home mounted");
        Ok(Self { typewriter, reveal })
    }

    pub fn typewriter(&self) -> &TypewriterLoop {
        &self.typewriter
    }

    pub fn reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    pub fn unmount(self) {
        self.typewriter.stop();
        self.reveal.unmount();
        log::debug!("home unmounted");
    }
}

/// State computed when the About view mounts.
#[derive(Debug)]
pub struct AboutLifecycle {
    summary: StatisticSummary,
    _reveal: ScrollReveal,
}

impl AboutLifecycle {
    pub fn mount(store: &dyn KeyValueStore, animator: &dyn ScrollAnimator) -> Self {
        let reveal = ScrollReveal::mount(animator, RevealOptions::ABOUT);
        let summary = StatisticSummary::from_store(store);
        log::debug!("about mounted with {summary:?}");
        Self {
            summary,
            _reveal: reveal,
        }
    }

    pub fn summary(&self) -> StatisticSummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        reveal::{tests::RecordingAnimator, VirtualViewport},
        schedule::VirtualScheduler,
        stats::{CERTIFICATES_KEY, PROJECTS_KEY},
        store::MemoryStore,
    };
    use std::{cell::RefCell, time::Duration};

    struct Fixture {
        scheduler: VirtualScheduler,
        animator: Rc<RecordingAnimator>,
        viewport: VirtualViewport,
        texts: Rc<RefCell<Vec<String>>>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                scheduler: VirtualScheduler::new(),
                animator: Rc::new(RecordingAnimator::default()),
                viewport: VirtualViewport::new(),
                texts: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn mount_home(&self) -> HomeLifecycle {
            let texts = self.texts.clone();
            HomeLifecycle::mount(
                Rc::new(self.scheduler.clone()),
                self.animator.clone(),
                &self.viewport,
                move |state: &TypewriterState| texts.borrow_mut().push(state.current_text.clone()),
            )
            .expect("default phrases are non-empty")
        }
    }

    #[test]
    fn test_home_mount_starts_effects() {
        let fx = Fixture::new();
        let home = fx.mount_home();

        assert_eq!(*fx.animator.calls.borrow(), vec![RevealOptions::HOME]);
        assert!(home.reveal().is_responsive());
        assert_eq!(fx.viewport.listener_count(), 1);
        assert_eq!(fx.scheduler.pending(), 1);

        fx.scheduler.advance(Duration::from_millis(700));
        assert_eq!(home.typewriter().state().current_text, "Network");
    }

    #[test]
    fn test_home_unmount_stops_ticks() {
        let fx = Fixture::new();
        let home = fx.mount_home();
        fx.scheduler.advance(Duration::from_millis(350));
        let texts_before = fx.texts.borrow().clone();

        home.unmount();
        assert_eq!(fx.scheduler.pending(), 0);
        assert_eq!(fx.viewport.listener_count(), 0);

        fx.scheduler.advance(Duration::from_secs(60));
        assert_eq!(*fx.texts.borrow(), texts_before);
    }

    #[test]
    fn test_home_drop_releases_effects() {
        let fx = Fixture::new();
        {
            let _home = fx.mount_home();
        }
        assert_eq!(fx.scheduler.pending(), 0);
        assert_eq!(fx.viewport.listener_count(), 0);
    }

    #[test]
    fn test_home_resize_reinitializes_once_per_event() {
        let fx = Fixture::new();
        let _home = fx.mount_home();
        for expected in 2..=5 {
            fx.viewport.resize();
            assert_eq!(fx.animator.calls.borrow().len(), expected);
        }
    }

    #[test]
    fn test_home_rejects_empty_words() {
        let fx = Fixture::new();
        let words: [&str; 0] = [];
        let res = HomeLifecycle::mount_with_words(
            &words,
            Rc::new(fx.scheduler.clone()),
            fx.animator.clone(),
            &fx.viewport,
            |_: &TypewriterState| {},
        );
        assert!(matches!(res, Err(TypewriterError::NoPhrases)));
        assert!(fx.animator.calls.borrow().is_empty());
        assert_eq!(fx.scheduler.pending(), 0);
    }

    #[test]
    fn test_about_mount() {
        let animator = RecordingAnimator::default();
        let store = MemoryStore::new()
            .with(PROJECTS_KEY, r#"[{"a":1},{"a":2}]"#)
            .with(CERTIFICATES_KEY, "[1]");
        let about = AboutLifecycle::mount(&store, &animator);

        assert_eq!(
            about.summary(),
            StatisticSummary {
                total_projects: 2,
                total_certificates: 1,
            }
        );
        assert_eq!(*animator.calls.borrow(), vec![RevealOptions::ABOUT]);
    }
}
