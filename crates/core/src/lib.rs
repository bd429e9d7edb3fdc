//! oledcfg-core: build-configuration selection for the SSD1315 OLED driver
//!
//! This crate maps the framework tokens a build declares (e.g. PlatformIO's
//! `PIOFRAMEWORK`) onto the configuration the driver library needs:
//! - `Framework`: the recognized hardware abstraction layers
//! - `Selection`: the defines, source exclusions, and diagnostic for a build
//! - `SrcFilter`: the include-all-except filter for excluded sources
//!
//! Selection is a pure function of the token list; applying the resulting
//! record to a concrete build environment is the caller's job.

mod error;
mod filter;
mod fragment;
mod framework;
mod selection;

pub use error::CoreError;
pub use filter::SrcFilter;
pub use fragment::{FRAGMENT_FILE_NAME, write_fragment};
pub use framework::Framework;
pub use selection::{
  ARDUINO_ADAPTER_SRC, Define, OLED_PLATFORM_ESPIDF, OLED_PLATFORM_STM32HAL, OLED_SSD1315_ENABLE,
  OLED_USE_ARDUINO, OLED_USE_ESPIDF, OLED_USE_STM32HAL, Selection, enable_define, select_framework,
};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
