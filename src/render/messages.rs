// src/render/messages.rs
// =============================================================================
// User-facing messages in each supported language.
//
// Russian is the default: the order service and its web page were built for
// Russian-speaking users. English is available with --lang en.
// =============================================================================

use clap::ValueEnum;

/// Language of the messages shown in the output area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    /// Shown when the identifier is empty
    pub fn enter_id_prompt(self) -> &'static str {
        match self {
            Locale::Ru => "Введите order_uid",
            Locale::En => "Enter an order_uid",
        }
    }

    /// Shown while the request is in flight
    pub fn loading(self) -> &'static str {
        match self {
            Locale::Ru => "Загрузка…",
            Locale::En => "Loading…",
        }
    }

    /// Shown when the service answers with a non-success status
    pub fn http_error(self, status: u16) -> String {
        match self {
            Locale::Ru => format!("Ошибка: {}", status),
            Locale::En => format!("Error: {}", status),
        }
    }

    /// Shown when the service cannot be reached or answers garbage
    pub fn unreachable(self) -> &'static str {
        match self {
            Locale::Ru => "Сеть недоступна или сервер не запущен",
            Locale::En => "Network unavailable or server not running",
        }
    }
}
