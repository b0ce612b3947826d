//! Clickable rectangle lists used by the main menu and the level picker,
//! plus the bouncing-ball decoration of the main menu.

use macroquad::prelude::*;

#[derive(Debug, Clone, PartialEq)]
/// One clickable box.
pub struct MenuItem<A> {
    /// Box in window pixels.
    pub rect: Rect,
    /// Text drawn inside the box.
    pub label: String,
    /// Returned when the box is clicked.
    pub action: A,
    /// Cursor was over the box at the last update.
    pub hovered: bool,
}

/// A list of labelled boxes, each bound to an action of type `A`.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu<A> {
    items: Vec<MenuItem<A>>,
}

impl<A: Copy> Menu<A> {
    /// A menu without items.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a box; items are hit-tested in insertion order.
    pub fn push(&mut self, rect: Rect, label: impl Into<String>, action: A) {
        self.items.push(MenuItem {
            rect,
            label: label.into(),
            action,
            hovered: false,
        });
    }

    /// Boxes in insertion order.
    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }

    /// Refreshes hover state for `mouse` and returns the action of the item
    /// under it if the button was pressed this frame. Edges count as inside.
    pub fn update(&mut self, mouse: Vec2, clicked: bool) -> Option<A> {
        let mut selected = None;
        for item in &mut self.items {
            let r = item.rect;
            item.hovered =
                mouse.x >= r.x && mouse.x <= r.x + r.w && mouse.y >= r.y && mouse.y <= r.y + r.h;
            if item.hovered && clicked {
                selected = Some(item.action);
            }
        }
        selected
    }
}

impl<A: Copy> Default for Menu<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// What the main menu boxes do.
pub enum MainMenuAction {
    /// Back to the level in play.
    Resume,
    /// Open the level picker.
    SelectLevel,
    /// Quit the game.
    Exit,
}

/// RESUME, SELECT LEVEL and EXIT, stacked on the left.
pub fn main_menu() -> Menu<MainMenuAction> {
    let mut menu = Menu::new();
    menu.push(Rect::new(200.0, 400.0, 265.0, 100.0), "RESUME", MainMenuAction::Resume);
    menu.push(
        Rect::new(200.0, 550.0, 500.0, 100.0),
        "SELECT LEVEL",
        MainMenuAction::SelectLevel,
    );
    menu.push(Rect::new(200.0, 700.0, 160.0, 100.0), "EXIT", MainMenuAction::Exit);
    menu
}

/// One 100x100 box per level, four to a row; labels are 1-based, actions
/// carry the level id.
pub fn level_select(count: usize) -> Menu<usize> {
    const PER_ROW: usize = 4;
    const SPACING: f32 = 250.0;

    let mut menu = Menu::new();
    for id in 0..count {
        let col = (id % PER_ROW) as f32;
        let row = (id / PER_ROW) as f32;
        let rect = Rect::new(530.0 + col * SPACING, 120.0 + row * SPACING, 100.0, 100.0);
        menu.push(rect, (id + 1).to_string(), id);
    }
    menu
}

/// Two linked balls bobbing in opposite directions, with a third resting
/// between them.
#[derive(Debug, Clone, PartialEq)]
pub struct BallAnimation {
    /// Left ball centre.
    pub first: Vec2,
    /// Right ball centre, mirrors `first`.
    pub second: Vec2,
    /// Middle ball centre, never moves.
    pub third: Vec2,
    /// Radius of the moving balls.
    pub radius: f32,
    speed: f32,
    first_up: bool,
}

impl Default for BallAnimation {
    fn default() -> Self {
        Self {
            first: vec2(1200.0, 540.0),
            second: vec2(1600.0, 540.0),
            third: vec2(1400.0, 540.0),
            radius: 30.0,
            speed: 500.0,
            first_up: false,
        }
    }
}

impl BallAnimation {
    /// Moves the balls by `dt` seconds, reversing near the top edge.
    pub fn update(&mut self, dt: f32) {
        if self.first.y < self.radius || self.second.y < self.radius {
            self.first_up = !self.first_up;
        }

        let step = self.speed * dt;
        if self.first_up {
            self.first.y -= step;
            self.second.y += step;
        } else {
            self.first.y += step;
            self.second.y -= step;
        }
    }
}
