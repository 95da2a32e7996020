//! Enter/update/exit animation of donut slices.
//!
//! The animator owns a side table of cached slice angles keyed by record id
//! and reconciles it against each new record list: slices present before and
//! after tween between their angle pairs, new slices sweep in from a
//! collapsed arc at their end angle, removed slices collapse and are dropped
//! once their tween ends. Frames are stepped from `requestAnimationFrame`
//! and published as [`SliceFrame`]s through a reactive signal.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::arc::{arc_path, centroid};
use super::layout::{pie_angles, SliceAngles};
use super::palette::ColorScale;
use super::tween::{ArcTween, FadeTween, DEFAULT_OPACITY, HOVER_IN_MS, HOVER_OUT_MS};
use crate::state::global::Expense;

/// Per-frame render snapshot of one slice.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceFrame {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub color: &'static str,
    pub path: String,
    pub opacity: f64,
    /// Tooltip anchor relative to the chart center.
    pub anchor: (f64, f64),
}

struct SliceMeta {
    name: String,
    cost: f64,
    color: &'static str,
}

#[derive(Default)]
struct Inner {
    /// Cached target angles per record id; advanced as soon as a tween is
    /// scheduled, so retargeting identical data is a no-op net of animation.
    cached: HashMap<String, SliceAngles>,
    /// Angles as currently displayed.
    shown: HashMap<String, SliceAngles>,
    opacity: HashMap<String, f64>,
    meta: HashMap<String, SliceMeta>,
    tweens: HashMap<String, ArcTween>,
    fades: HashMap<String, FadeTween>,
    /// Draw order: current list order, exiting slices at the tail.
    order: Vec<String>,
    exiting: HashSet<String>,
    frame_cb: Option<Closure<dyn FnMut(f64)>>,
    running: bool,
}

/// Id-keyed slice reconciler and animation scheduler.
#[derive(Clone)]
pub struct Animator {
    inner: Rc<RefCell<Inner>>,
    slices: RwSignal<Vec<SliceFrame>>,
}

impl Animator {
    pub fn new() -> Self {
        Animator {
            inner: Rc::new(RefCell::new(Inner::default())),
            slices: create_rw_signal(Vec::new()),
        }
    }

    /// Rendered slice frames, refreshed once per animation frame.
    pub fn slices(&self) -> RwSignal<Vec<SliceFrame>> {
        self.slices
    }

    /// Reconcile the side table against a new record list and schedule the
    /// enter/update/exit tweens. A tween scheduled here replaces any
    /// in-flight tween on the same slice.
    pub fn retarget(&self, expenses: &[Expense]) {
        let colors = ColorScale::from_names(expenses.iter().map(|e| e.name.as_str()));
        let costs: Vec<f64> = expenses.iter().map(|e| e.cost).collect();
        let targets = pie_angles(&costs);

        {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            let mut order = Vec::with_capacity(expenses.len());
            let mut present: HashSet<String> = HashSet::with_capacity(expenses.len());

            for (expense, target) in expenses.iter().zip(targets) {
                order.push(expense.id.clone());
                present.insert(expense.id.clone());
                inner.exiting.remove(&expense.id);
                inner.meta.insert(
                    expense.id.clone(),
                    SliceMeta {
                        name: expense.name.clone(),
                        cost: expense.cost,
                        color: colors.color(&expense.name),
                    },
                );

                let tween = match inner.cached.get(&expense.id) {
                    Some(prev) => ArcTween::between(*prev, target),
                    None => {
                        inner.shown.insert(expense.id.clone(), target.collapsed());
                        inner.opacity.insert(expense.id.clone(), DEFAULT_OPACITY);
                        ArcTween::enter(target)
                    }
                };
                inner.cached.insert(expense.id.clone(), target);
                inner.tweens.insert(expense.id.clone(), tween);
            }

            // Slices no longer in the list collapse, then drop out of the
            // side table when their tween finishes.
            let gone: Vec<String> = inner
                .cached
                .keys()
                .filter(|id| !present.contains(*id))
                .cloned()
                .collect();
            for id in gone {
                if inner.exiting.insert(id.clone()) {
                    let from = inner.cached[&id];
                    inner.tweens.insert(id.clone(), ArcTween::exit(from));
                }
                order.push(id);
            }

            inner.order = order;
        }

        self.publish();
        self.ensure_running();
    }

    /// Hover feedback: fade the slice to full opacity and back.
    pub fn hover(&self, id: &str, hovered: bool) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.meta.contains_key(id) {
                return;
            }
            let from = inner.opacity.get(id).copied().unwrap_or(DEFAULT_OPACITY);
            let fade = if hovered {
                FadeTween::new(from, 1.0, HOVER_IN_MS)
            } else {
                FadeTween::new(from, DEFAULT_OPACITY, HOVER_OUT_MS)
            };
            inner.fades.insert(id.to_string(), fade);
        }
        self.ensure_running();
    }

    /// Advance all tweens to `now_ms`. Returns whether any are still live.
    fn step(&self, now_ms: f64) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;

            let mut done_arcs = Vec::new();
            for (id, tween) in inner.tweens.iter_mut() {
                inner.shown.insert(id.clone(), tween.sample(now_ms));
                if tween.finished(now_ms) {
                    done_arcs.push(id.clone());
                }
            }
            for id in done_arcs {
                inner.tweens.remove(&id);
                if inner.exiting.remove(&id) {
                    inner.cached.remove(&id);
                    inner.shown.remove(&id);
                    inner.opacity.remove(&id);
                    inner.meta.remove(&id);
                    inner.fades.remove(&id);
                    inner.order.retain(|o| o != &id);
                }
            }

            let mut done_fades = Vec::new();
            for (id, fade) in inner.fades.iter_mut() {
                inner.opacity.insert(id.clone(), fade.sample(now_ms));
                if fade.finished(now_ms) {
                    done_fades.push(id.clone());
                }
            }
            for id in done_fades {
                inner.fades.remove(&id);
            }
        }

        self.publish();

        let inner = self.inner.borrow();
        !inner.tweens.is_empty() || !inner.fades.is_empty()
    }

    /// Rebuild and publish the frame list from the side table.
    fn publish(&self) {
        let frames: Vec<SliceFrame> = {
            let inner = self.inner.borrow();
            inner
                .order
                .iter()
                .filter_map(|id| {
                    let meta = inner.meta.get(id)?;
                    let angles = inner.shown.get(id).copied()?;
                    Some(SliceFrame {
                        id: id.clone(),
                        name: meta.name.clone(),
                        cost: meta.cost,
                        color: meta.color,
                        path: arc_path(angles),
                        opacity: inner.opacity.get(id).copied().unwrap_or(DEFAULT_OPACITY),
                        anchor: centroid(angles),
                    })
                })
                .collect()
        };
        self.slices.set(frames);
    }

    /// Start the frame loop if it is not already running. The loop suspends
    /// itself once no tween is active.
    fn ensure_running(&self) {
        if self.inner.borrow().frame_cb.is_none() {
            let animator = self.clone();
            let cb = Closure::wrap(Box::new(move |ts: f64| {
                if animator.step(ts) {
                    animator.request_frame();
                } else {
                    animator.inner.borrow_mut().running = false;
                }
            }) as Box<dyn FnMut(f64)>);
            self.inner.borrow_mut().frame_cb = Some(cb);
        }

        {
            let mut inner = self.inner.borrow_mut();
            if inner.running {
                return;
            }
            inner.running = true;
        }
        self.request_frame();
    }

    fn request_frame(&self) {
        let inner = self.inner.borrow();
        if let (Some(window), Some(cb)) = (web_sys::window(), inner.frame_cb.as_ref()) {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
