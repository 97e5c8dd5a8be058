//! Combobox widget: a filterable text input with a popup option list.
//!
//! The widget is rebuilt every frame from externally held
//! [`ComboboxWidgetState`]. Interaction runs through the headless
//! [`ComboboxState`](::combobox::ComboboxState) machine; the widget only maps
//! pointer and keyboard events onto it, edits the input text and draws.
//!
//! Two callbacks report back:
//! - `on_state_change` returns the updated widget state as a message whenever
//!   anything changed
//! - `on_change` runs synchronously with the selected unique key (or `None`
//!   on deselect) when the user picks or clears an option

use std::rc::Rc;

use web_time::Instant;

use ::combobox::aria::{self, AccessibilityNode};
use ::combobox::{ComboboxConfig, Focus, KeyOutcome, NavKey, OptionSet};

use crate::callback::{Callback, SideEffect};
use crate::constants::{
    line_height, BORDER_WIDTH, DEFAULT_FONT_SIZE, LABEL_SPACING, MARKER_WIDTH, MIN_INPUT_WIDTH,
    OPTION_HEIGHT, PADDING_STANDARD, POPUP_GAP, TEXT_INPUT_PADDING, TOGGLE_WIDTH,
};
use crate::event::{Event, KeyCode, KeyModifiers, MouseButton};
use crate::layout::{Bounds, Length, Padding, Size};
use crate::outside_click::OutsideClick;
use crate::renderer::Renderer;
use crate::state::ComboboxWidgetState;
use crate::text_edit::{self, char_count, char_width};
use crate::theme::{ComboboxStyle, ComboboxStyleSheet};
use crate::widget::{EventResult, Widget};
use crate::{builder_field, builder_option, callback_setter, side_effect_setter};

/// Screen areas of a laid-out combobox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboboxGeometry {
    /// Label row, if the combobox has a label
    pub label: Option<Bounds>,
    /// Text input including the toggle
    pub input: Bounds,
    /// Dropdown toggle at the right edge of the input
    pub toggle: Bounds,
    /// Popup list, present while open with at least one option
    pub popup: Option<Bounds>,
    option_count: usize,
}

impl ComboboxGeometry {
    /// Row of the rendered option at `position`.
    pub fn option_bounds(&self, position: usize) -> Option<Bounds> {
        let popup = self.popup?;
        (position < self.option_count).then(|| {
            Bounds::new(
                popup.x,
                popup.y + position as f32 * OPTION_HEIGHT,
                popup.width,
                OPTION_HEIGHT,
            )
        })
    }

    /// Rendered option position under `(x, y)`.
    pub fn option_at(&self, x: f32, y: f32) -> Option<usize> {
        let popup = self.popup?;
        if !popup.contains(x, y) {
            return None;
        }
        let position = ((y - popup.y) / OPTION_HEIGHT) as usize;
        Some(position.min(self.option_count.saturating_sub(1)))
    }

    /// Rectangles that count as "inside" for outside-click dismissal.
    pub fn regions(&self) -> Vec<Bounds> {
        self.label
            .into_iter()
            .chain(Some(self.input))
            .chain(self.popup)
            .collect()
    }
}

/// A filterable selection input.
///
/// The [`ComboboxConfig`] is authoritative: its option fields decide how the
/// option set is read and its debounce delay applies to the state passed in.
/// Without an explicit config, one is derived from the option set's fields.
pub struct Combobox<M> {
    options: Rc<OptionSet>,
    config: ComboboxConfig,
    /// Widget state (cloned from external)
    state: ComboboxWidgetState,
    style: ComboboxStyle,
    /// Class-keyed styles, resolved with `config.class_name`
    style_sheet: Option<Rc<ComboboxStyleSheet>>,
    width: Length,
    padding: Padding,
    font_size: f32,
    on_state_change: Callback<ComboboxWidgetState, M>,
    on_change: SideEffect<Option<String>>,
}

impl<M> Combobox<M> {
    pub fn new(options: Rc<OptionSet>) -> Self {
        let config = ComboboxConfig::from_fields(options.fields());
        let mut state = ComboboxWidgetState::default();
        state.core.set_debounce_delay(config.debounce_delay());
        Self {
            options,
            config,
            state,
            style: ComboboxStyle::default(),
            style_sheet: None,
            width: Length::Fill(1.0),
            padding: TEXT_INPUT_PADDING,
            font_size: DEFAULT_FONT_SIZE,
            on_state_change: Callback::none(),
            on_change: SideEffect::none(),
        }
    }

    /// Set the state (copies the state)
    pub fn state(mut self, state: &ComboboxWidgetState) -> Self {
        self.state = state.clone();
        self.apply_config();
        self
    }

    pub fn config(mut self, config: ComboboxConfig) -> Self {
        self.config = config;
        self.apply_config();
        self
    }

    builder_field!(style, ComboboxStyle);
    builder_option!(style_sheet, Rc<ComboboxStyleSheet>);
    builder_field!(font_size, f32);

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    callback_setter!(on_state_change, ComboboxWidgetState);

    // Called with the selected unique key, or `None` when the selection is cleared
    side_effect_setter!(on_change, Option<String>);

    /// Bring the option set and state in line with the config.
    fn apply_config(&mut self) {
        let fields = self.config.fields();
        if *self.options.fields() != fields {
            log::trace!(
                "Combobox: reading options with selection_key='{}', unique_key='{}'",
                fields.selection_key,
                fields.unique_key
            );
            self.options = Rc::new(OptionSet::new(self.options.options().to_vec(), fields));
        }
        let delay = self.config.debounce_delay();
        if self.state.core.debounce_delay() != delay {
            self.state.core.set_debounce_delay(delay);
        }
    }

    /// Style after class lookup.
    fn resolved_style(&self) -> &ComboboxStyle {
        match &self.style_sheet {
            Some(sheet) => sheet.resolve(self.config.class_name.as_deref()),
            None => &self.style,
        }
    }

    /// Accessibility tree for the current state.
    pub fn accessibility(&self) -> AccessibilityNode {
        aria::snapshot(&self.state.core, &self.options, &self.config)
    }

    fn label_height(&self) -> f32 {
        match self.config.label {
            Some(_) => line_height(self.font_size) + LABEL_SPACING,
            None => 0.0,
        }
    }

    fn input_height(&self) -> f32 {
        line_height(self.font_size) + self.padding.vertical()
    }

    /// Lay out the parts of the combobox within `bounds`.
    pub fn geometry(&self, bounds: Bounds) -> ComboboxGeometry {
        let label_height = self.label_height();
        let label = self
            .config
            .label
            .as_ref()
            .map(|_| Bounds::new(bounds.x, bounds.y, bounds.width, label_height));
        let input = Bounds::new(
            bounds.x,
            bounds.y + label_height,
            bounds.width,
            self.input_height(),
        );
        let toggle = Bounds::new(
            input.right() - TOGGLE_WIDTH,
            input.y,
            TOGGLE_WIDTH,
            input.height,
        );

        let option_count = self.state.core.rendered().len();
        let popup = (option_count > 0).then(|| {
            Bounds::new(
                input.x,
                input.bottom() + POPUP_GAP,
                input.width,
                option_count as f32 * OPTION_HEIGHT,
            )
        });

        ComboboxGeometry {
            label,
            input,
            toggle,
            popup,
            option_count,
        }
    }

    /// Text area of the input, left of the toggle.
    fn content_bounds(&self, input: Bounds) -> Bounds {
        let inner = input.shrink(&self.padding);
        Bounds::new(
            inner.x,
            inner.y,
            (inner.width - TOGGLE_WIDTH).max(0.0),
            inner.height,
        )
    }

    fn report(&self, change: Option<String>) {
        log::debug!("Combobox: on_change({:?})", change);
        self.on_change.emit(change);
    }

    /// Replace the input text after a user edit and schedule filtering.
    fn edit_text(&mut self, edit: impl FnOnce(&mut text_edit::Caret, &mut String) -> bool) {
        let mut value = self.state.core.display_text().to_string();
        if edit(&mut self.state.caret, &mut value) {
            self.state.core.input_changed(value, Instant::now());
            self.state.hovered = None;
        }
    }

    fn handle_press(&mut self, geometry: &ComboboxGeometry, x: f32, y: f32, modifiers: KeyModifiers) {
        let options = Rc::clone(&self.options);

        if let Some(position) = geometry.option_at(x, y) {
            if let Some(change) = self.state.core.select(&options, position) {
                self.state.caret_to_end();
                self.state.hovered = None;
                self.report(change.into_value());
            }
        } else if geometry.toggle.contains(x, y) {
            self.state.core.toggle(&options);
            self.state.caret.clamp(char_count(self.state.core.display_text()));
        } else if geometry.input.contains(x, y) {
            let was_focused = self.state.is_focused();
            if self.state.core.is_open() {
                self.state.core.focus_input();
            } else {
                self.state.core.open(&options);
            }

            let content = self.content_bounds(geometry.input);
            let len = char_count(self.state.core.display_text());
            let index = text_edit::x_to_char_index(x, content.x, self.font_size, len);
            if modifiers.shift && was_focused {
                let anchor = self
                    .state
                    .caret
                    .selection
                    .map(|(anchor, _)| anchor)
                    .unwrap_or(self.state.caret.cursor);
                self.state.caret.cursor = index;
                self.state.caret.selection = Some((anchor, index));
            } else {
                self.state.caret = text_edit::Caret::at(index);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        let options = Rc::clone(&self.options);
        let len = char_count(self.state.core.display_text());

        let nav = match key {
            KeyCode::Up => Some(NavKey::Up),
            KeyCode::Down => Some(NavKey::Down),
            KeyCode::Escape => Some(NavKey::Escape),
            KeyCode::Enter => Some(NavKey::Enter),
            KeyCode::Home if matches!(self.state.core.focus(), Focus::Option(_)) => {
                Some(NavKey::Home)
            }
            KeyCode::End if matches!(self.state.core.focus(), Focus::Option(_)) => {
                Some(NavKey::End)
            }
            _ => None,
        };

        if let Some(nav) = nav {
            match self.state.core.key_down(&options, nav) {
                KeyOutcome::Changed(change) => {
                    self.state.caret_to_end();
                    self.state.hovered = None;
                    self.report(change.into_value());
                }
                KeyOutcome::Handled if nav == NavKey::Escape => self.state.caret_to_end(),
                KeyOutcome::Handled | KeyOutcome::Ignored => {}
            }
            return;
        }

        match key {
            KeyCode::Left => self.state.caret.left(modifiers.shift),
            KeyCode::Right => self.state.caret.right(len, modifiers.shift),
            KeyCode::Home => self.state.caret.home(modifiers.shift),
            KeyCode::End => self.state.caret.end(len, modifiers.shift),
            KeyCode::A if modifiers.ctrl => self.state.caret.select_all(len),
            KeyCode::Backspace => self.edit_text(|caret, value| caret.backspace(value)),
            KeyCode::Delete => self.edit_text(|caret, value| caret.delete(value)),
            _ => {}
        }
    }

    fn dismiss(&mut self) {
        self.state.core.click_outside();
        self.state.caret.selection = None;
        self.state.hovered = None;
    }

    fn draw_popup(&self, renderer: &mut Renderer, geometry: &ComboboxGeometry) {
        let Some(popup) = geometry.popup else {
            return;
        };
        let style = self.resolved_style();

        renderer.begin_overlay();
        renderer.register_overlay(popup);
        renderer.fill_rect(popup, style.popup_bg);
        renderer.stroke_rect(popup, style.popup_border, BORDER_WIDTH);

        let core = &self.state.core;
        let active = core.active_position();
        let marker = self.config.selected_icon();

        for (position, &index) in core.rendered().iter().enumerate() {
            let Some(row) = geometry.option_bounds(position) else {
                break;
            };

            if active == Some(position) {
                renderer.fill_rect(row, style.option_active);
            } else if self.state.hovered == Some(position) {
                renderer.fill_rect(row, style.option_hover);
            }

            let text_y = row.y + (row.height - self.font_size) / 2.0;
            let selected = core.is_selected(&self.options, index);
            let (marker_x, text_x) = if self.config.selected_icon_on_left {
                let marker_x = row.x + PADDING_STANDARD;
                (marker_x, marker_x + MARKER_WIDTH)
            } else {
                (row.right() - PADDING_STANDARD - MARKER_WIDTH, row.x + PADDING_STANDARD)
            };

            if selected && self.config.selected_icon_on_left {
                renderer.text(marker, marker_x, text_y, self.font_size, style.marker);
            }
            renderer.text(
                self.options.display(index),
                text_x,
                text_y,
                self.font_size,
                style.option_text,
            );
            if selected && !self.config.selected_icon_on_left {
                renderer.text(marker, marker_x, text_y, self.font_size, style.marker);
            }
        }

        renderer.end_overlay();
    }
}

impl<M: 'static> Widget<M> for Combobox<M> {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(
            self.width.resolve(available.width, MIN_INPUT_WIDTH),
            self.label_height() + self.input_height(),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let geometry = self.geometry(bounds);
        let focused = self.state.is_focused();
        let style = self.resolved_style();

        if let (Some(label_bounds), Some(label)) = (geometry.label, &self.config.label) {
            renderer.text(label, label_bounds.x, label_bounds.y, self.font_size, style.label);
        }

        let input = geometry.input;
        let (bg, border) = if focused {
            (style.input_bg_focused, style.border_focused)
        } else {
            (style.input_bg, style.border)
        };
        renderer.fill_rect(input, bg);
        renderer.stroke_rect(input, border, BORDER_WIDTH);

        let content = self.content_bounds(input);
        if focused {
            text_edit::draw_selection(
                renderer,
                content,
                &self.state.caret,
                self.font_size,
                style.selection,
            );
        }

        let text_y = content.y + (content.height - self.font_size) / 2.0;
        let display = self.state.core.display_text();
        if display.is_empty() {
            renderer.text(
                &self.config.placeholder_text(),
                content.x,
                text_y,
                self.font_size,
                style.placeholder,
            );
        } else {
            renderer.text(display, content.x, text_y, self.font_size, style.text);
        }

        if focused {
            text_edit::draw_cursor(
                renderer,
                content,
                &self.state.caret,
                self.font_size,
                style.cursor,
            );
        }

        let icon_x = geometry.toggle.x + (TOGGLE_WIDTH - char_width(self.font_size)) / 2.0;
        renderer.text(
            self.config.dropdown_icon(),
            icon_x,
            text_y,
            self.font_size,
            style.icon,
        );

        self.draw_popup(renderer, &geometry);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let before = self.state.clone();
        let geometry = self.geometry(bounds);

        match event {
            Event::MousePress {
                button: MouseButton::Left,
                position: (x, y),
                modifiers,
            } => self.handle_press(&geometry, *x, *y, *modifiers),

            Event::GlobalMousePress { .. } => {
                let active = self.state.is_focused() || self.state.core.is_open();
                if active && OutsideClick::should_dismiss(event, &geometry.regions()) {
                    self.dismiss();
                }
            }

            Event::FocusLost => {
                if self.state.is_focused() || self.state.core.is_open() {
                    self.dismiss();
                }
            }

            Event::MouseMove { position: (x, y), .. } => {
                self.state.hovered = geometry.option_at(*x, *y);
            }

            Event::CursorLeft => self.state.hovered = None,

            Event::TextInput { text } if self.state.is_focused() => {
                let text = text.as_str();
                self.edit_text(|caret, value| {
                    caret.insert(value, text);
                    true
                });
            }

            Event::KeyPress { key, modifiers } if self.state.is_focused() => {
                self.handle_key(*key, *modifiers)
            }

            Event::Tick { now } => {
                if self.state.core.tick(&self.options, *now) {
                    let len = self.state.core.rendered().len();
                    self.state.hovered = self.state.hovered.filter(|&hovered| hovered < len);
                }
            }

            _ => {}
        }

        if self.state == before {
            return EventResult::None;
        }
        self.on_state_change.call(self.state.clone()).into()
    }

    fn has_active_overlay(&self) -> bool {
        self.state.core.is_open() && !self.state.core.rendered().is_empty()
    }

    fn capture_bounds(&self, layout_bounds: Bounds) -> Option<Bounds> {
        let geometry = self.geometry(layout_bounds);
        geometry
            .popup
            .map(|popup| layout_bounds.union(&popup))
    }
}

/// Create a combobox over `options`.
pub fn combobox<M>(options: Rc<OptionSet>) -> Combobox<M> {
    Combobox::new(options)
}
