//! One-way "has this element been seen yet" latch behind the scroll
//! animations. The latch itself knows nothing about the DOM: samples come
//! from an [`IntersectionSource`], which the browser build backs with an
//! `IntersectionObserver` and tests drive by hand.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be inside the viewport, 0.0 to 1.0.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn visible(ratio: f64) -> Self {
        Self { is_intersecting: true, ratio }
    }

    pub fn hidden() -> Self {
        Self { is_intersecting: false, ratio: 0.0 }
    }
}

/// What a listener wants after handling a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    Continue,
    Stop,
}

pub type IntersectionListener = Box<dyn FnMut(IntersectionSample) -> Observation>;

/// Something that can report how much of one element is on screen.
pub trait IntersectionSource {
    /// Delivers samples to `listener` until it answers [`Observation::Stop`]
    /// or [`IntersectionSource::disconnect`] is called.
    fn observe(&mut self, listener: IntersectionListener);
    fn disconnect(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one sample in. Returns true only for the sample that flips the
    /// latch; once visible it never goes back.
    pub fn record(&mut self, sample: IntersectionSample) -> bool {
        if self.visible {
            return false;
        }
        if sample.is_intersecting && sample.ratio >= self.threshold {
            self.visible = true;
            return true;
        }
        false
    }
}

/// A latch wired to a source. Cloning shares the same latch.
#[derive(Clone)]
pub struct ScrollReveal {
    latch: Rc<RefCell<RevealLatch>>,
}

impl ScrollReveal {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            latch: Rc::new(RefCell::new(RevealLatch::new(config.threshold))),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.latch.borrow().is_visible()
    }

    /// Starts watching `source`. `on_visible` runs once, for the first
    /// qualifying sample, and the source is told to stop right after.
    pub fn attach<S>(&self, source: &mut S, on_visible: impl FnOnce() + 'static)
    where
        S: IntersectionSource + ?Sized,
    {
        if self.is_visible() {
            return;
        }
        let latch = self.latch.clone();
        let mut on_visible = Some(on_visible);
        source.observe(Box::new(move |sample| {
            if latch.borrow_mut().record(sample) {
                if let Some(notify) = on_visible.take() {
                    notify();
                }
                Observation::Stop
            } else {
                Observation::Continue
            }
        }));
    }
}

/// Source fed by explicit `trigger` calls instead of the layout engine.
#[derive(Default)]
pub struct ManualIntersectionSource {
    listener: Option<IntersectionListener>,
}

impl ManualIntersectionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observing(&self) -> bool {
        self.listener.is_some()
    }

    pub fn trigger(&mut self, sample: IntersectionSample) {
        if let Some(listener) = self.listener.as_mut() {
            if listener(sample) == Observation::Stop {
                self.listener = None;
            }
        }
    }
}

impl IntersectionSource for ManualIntersectionSource {
    fn observe(&mut self, listener: IntersectionListener) {
        self.listener = Some(listener);
    }

    fn disconnect(&mut self) {
        self.listener = None;
    }
}
