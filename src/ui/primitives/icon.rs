use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Bullet,
    MapsTo,
    Transfer,
    Queue,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (true, Icon::MapsTo) => theme::icons::MAPS_TO,
            (true, Icon::Transfer) => theme::icons::TRANSFER,
            (true, Icon::Queue) => theme::icons::QUEUE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
            (false, Icon::MapsTo) => theme::icons_ascii::MAPS_TO,
            (false, Icon::Transfer) => theme::icons_ascii::TRANSFER,
            (false, Icon::Queue) => theme::icons_ascii::QUEUE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Bullet | Icon::MapsTo => theme::colors::DIM,
            Icon::Transfer | Icon::Queue => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
