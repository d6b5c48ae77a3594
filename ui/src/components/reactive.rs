//! Attribute-driven component runtime.
//!
//! A [`ReactiveComponent`] is a pure function from string attributes to an
//! output tree. [`ReactiveHost`] stores the attributes, decides when to call
//! that function again, and keeps only the latest output: every render
//! replaces the previous output wholesale.

use crate::components::common::Msg;
use crate::components::state::ComponentState;
use crate::error::AppResult;
use serde::Deserialize;
use std::collections::BTreeMap;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::ratatui::layout::Rect;
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, Props, State};

/// Attribute values by name, as last written by the host.
pub type AttributeMap = BTreeMap<&'static str, String>;

/// When a write to a watched attribute triggers a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPolicy {
    /// Every write renders, including a write of the value already stored
    #[default]
    EveryWrite,
    /// Only writes that change the stored value render
    OnChange,
}

/// A widget whose output is derived entirely from its attributes.
pub trait ReactiveComponent {
    /// Typed snapshot of the attributes, rebuilt for every render
    type Props;
    /// Rendered output, replaced on every render
    type Output;

    /// Name used in logs
    const TAG: &'static str;

    /// Attributes whose writes re-render a mounted component. Empty means
    /// the component renders once, on mount.
    const WATCHED: &'static [&'static str] = &[];

    /// Resolves raw attributes into props. Lookup and parse failures are
    /// settled here, so `render` never fails.
    fn props(&self, attributes: &AttributeMap) -> Self::Props;

    fn render(&self, props: &Self::Props) -> Self::Output;

    fn draw(&self, output: &Self::Output, frame: &mut Frame, area: Rect, focused: bool);

    fn on_event(&self, _output: &Self::Output, _ev: &Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

/// Runtime adapter that owns a [`ReactiveComponent`] and its attributes.
pub struct ReactiveHost<C: ReactiveComponent> {
    component: C,
    attributes: AttributeMap,
    output: Option<C::Output>,
    policy: RenderPolicy,
    is_mounted: bool,
    render_count: usize,
    props: Props,
}

impl<C: ReactiveComponent> ReactiveHost<C> {
    pub fn new(component: C) -> Self {
        Self {
            component,
            attributes: AttributeMap::new(),
            output: None,
            policy: RenderPolicy::default(),
            is_mounted: false,
            render_count: 0,
            props: Props::default(),
        }
    }

    pub fn with_policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder form of [`ReactiveHost::set_attribute`] for attributes known before mounting.
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Stores an attribute and re-renders if the component is mounted, the
    /// attribute is watched, and the policy allows it. Returns whether a
    /// render happened.
    pub fn set_attribute(&mut self, name: &'static str, value: impl Into<String>) -> bool {
        let value = value.into();
        let changed = self.attributes.get(name) != Some(&value);
        self.attributes.insert(name, value);

        let should_render = self.is_mounted
            && C::WATCHED.contains(&name)
            && (changed || self.policy == RenderPolicy::EveryWrite);
        if should_render {
            log::trace!("{}: attribute '{}' changed, re-rendering", C::TAG, name);
            self.render();
        }
        should_render
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Latest output; `None` until mounted.
    pub fn output(&self) -> Option<&C::Output> {
        self.output.as_ref()
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn is_mounted(&self) -> bool {
        self.is_mounted
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    fn render(&mut self) {
        let props = self.component.props(&self.attributes);
        self.output = Some(self.component.render(&props));
        self.render_count += 1;
    }
}

impl<C: ReactiveComponent> ComponentState for ReactiveHost<C> {
    fn mount(&mut self) -> AppResult<()> {
        if self.is_mounted {
            log::warn!("{} is already mounted", C::TAG);
            return Ok(());
        }

        self.is_mounted = true;
        self.render();
        log::debug!("{} component mounted successfully", C::TAG);
        Ok(())
    }
}

impl<C: ReactiveComponent> MockComponent for ReactiveHost<C> {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();
        if let Some(output) = &self.output {
            self.component.draw(output, frame, area, focused);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Custom(name) => self
                .attributes
                .get(name)
                .map(|value| AttrValue::String(value.clone())),
            other => self.props.get(other),
        }
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        match (attr, value) {
            (Attribute::Custom(name), AttrValue::String(value)) => {
                self.set_attribute(name, value);
            }
            (attr, value) => self.props.set(attr, value),
        }
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl<C: ReactiveComponent> Component<Msg, NoUserEvent> for ReactiveHost<C> {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let output = self.output.as_ref()?;
        self.component.on_event(output, &ev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_ok, assert_some_eq};

    /// Echoes its `name` attribute; watches only `name`.
    struct Echo;

    impl ReactiveComponent for Echo {
        type Props = String;
        type Output = String;
        const TAG: &'static str = "Echo";
        const WATCHED: &'static [&'static str] = &["name"];

        fn props(&self, attributes: &AttributeMap) -> String {
            attributes.get("name").cloned().unwrap_or_default()
        }

        fn render(&self, props: &String) -> String {
            format!("<{props}>")
        }

        fn draw(&self, _output: &String, _frame: &mut Frame, _area: Rect, _focused: bool) {}
    }

    #[test]
    fn nothing_renders_before_mount() {
        let mut host = ReactiveHost::new(Echo);
        assert!(!host.set_attribute("name", "a"));
        assert_none!(host.output());
        assert_eq!(host.render_count(), 0);
    }

    #[test]
    fn mount_renders_once_and_is_idempotent() {
        let mut host = ReactiveHost::new(Echo).with_attribute("name", "a");
        assert_ok!(host.mount());
        assert_ok!(host.mount());
        assert_eq!(host.render_count(), 1);
        assert_some_eq!(host.output(), &"<a>".to_string());
    }

    #[test]
    fn every_write_policy_renders_equal_values() {
        let mut host = ReactiveHost::new(Echo).with_attribute("name", "a");
        assert_ok!(host.mount());
        assert!(host.set_attribute("name", "a"));
        assert_eq!(host.render_count(), 2);
    }

    #[test]
    fn on_change_policy_skips_equal_values() {
        let mut host = ReactiveHost::new(Echo)
            .with_policy(RenderPolicy::OnChange)
            .with_attribute("name", "a");
        assert_ok!(host.mount());
        assert!(!host.set_attribute("name", "a"));
        assert!(host.set_attribute("name", "b"));
        assert_eq!(host.render_count(), 2);
        assert_some_eq!(host.output(), &"<b>".to_string());
    }

    #[test]
    fn unwatched_writes_are_stored_without_rendering() {
        let mut host = ReactiveHost::new(Echo);
        assert_ok!(host.mount());
        assert!(!host.set_attribute("other", "x"));
        assert_eq!(host.render_count(), 1);
        assert_some_eq!(host.attribute("other"), "x");
    }

    #[test]
    fn custom_attributes_route_through_tuirealm() {
        let mut host = ReactiveHost::new(Echo);
        assert_ok!(host.mount());
        host.attr(Attribute::Custom("name"), AttrValue::String("z".into()));
        assert_eq!(
            host.query(Attribute::Custom("name")),
            Some(AttrValue::String("z".into()))
        );
        assert_some_eq!(host.output(), &"<z>".to_string());
    }
}
