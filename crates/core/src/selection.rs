//! Framework selection and the resulting build-configuration record.
//!
//! The selector is a pure function over the declared framework token list.
//! It never mutates build state; callers apply the returned [`Selection`]
//! to whatever build environment their ecosystem uses.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::framework::Framework;

/// Define enabling the Arduino Wire transport adapter
pub const OLED_USE_ARDUINO: &str = "OLED_USE_ARDUINO";
/// Platform define for STM32Cube (vendor HAL) builds
pub const OLED_PLATFORM_STM32HAL: &str = "OLED_PLATFORM_STM32HAL";
/// Define enabling the STM32 HAL transport adapter
pub const OLED_USE_STM32HAL: &str = "OLED_USE_STM32HAL";
/// Platform define for ESP-IDF builds
pub const OLED_PLATFORM_ESPIDF: &str = "OLED_PLATFORM_ESPIDF";
/// Define enabling the (future) ESP-IDF transport adapter
pub const OLED_USE_ESPIDF: &str = "OLED_USE_ESPIDF";

/// Library enable flag, normally supplied by the user via build_flags
pub const OLED_SSD1315_ENABLE: &str = "OLED_SSD1315_ENABLE";

/// Source path of the Arduino Wire adapter, relative to the library root.
///
/// Excluded from compilation on STM32Cube builds, where `Wire.h` does not
/// exist.
pub const ARDUINO_ADAPTER_SRC: &str = "transport/WireI2cAdapter.cpp";

/// A preprocessor symbol/value pair injected into the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Define {
  pub name: String,
  pub value: u32,
}

impl Define {
  pub fn new(name: impl Into<String>, value: u32) -> Self {
    Self {
      name: name.into(),
      value,
    }
  }

  /// Render as a compiler flag (e.g. `-DOLED_USE_ARDUINO=1`)
  pub fn as_flag(&self) -> String {
    format!("-D{}={}", self.name, self.value)
  }
}

impl fmt::Display for Define {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}={}", self.name, self.value)
  }
}

/// The library enable define (`OLED_SSD1315_ENABLE=1`)
///
/// Not emitted by the selector itself; the original library expects the user
/// to pass it via build_flags, so the CLI appends it only on request.
pub fn enable_define() -> Define {
  Define::new(OLED_SSD1315_ENABLE, 1)
}

/// Result record of a framework selection.
///
/// Describes every change the build needs: the defines to append, the source
/// files to exclude from compilation, and the diagnostic line to print. The
/// record is freshly built per call and never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
  /// The framework that won the check, if any
  pub framework: Option<Framework>,

  /// Preprocessor defines to append to the build
  pub defines: Vec<Define>,

  /// Source paths to omit from compilation (library-root relative)
  pub excluded_sources: BTreeSet<String>,

  /// One-line diagnostic describing the branch taken
  pub message: String,
}

impl Selection {
  /// True when no framework token was recognized
  pub fn is_fallback(&self) -> bool {
    self.framework.is_none()
  }

  /// Look up the value of an emitted define by symbol name
  pub fn define_value(&self, name: &str) -> Option<u32> {
    self.defines.iter().find(|d| d.name == name).map(|d| d.value)
  }
}

/// Select the build configuration for the declared framework token list.
///
/// Checks tokens in the fixed order arduino → stm32cube → espidf; the first
/// match wins and the rest are ignored. Declaring several recognized tokens
/// at once is not an error, but it logs a warning since it usually indicates
/// a misconfigured platformio.ini. Empty or unrecognized input yields an
/// empty record and defers platform resolution to the driver headers.
pub fn select_framework<S: AsRef<str>>(tokens: &[S]) -> Selection {
  let recognized = Framework::recognized(tokens);
  if recognized.len() > 1 {
    let ignored: Vec<&str> = recognized[1..].iter().map(Framework::as_str).collect();
    warn!(
      winner = recognized[0].as_str(),
      ignored = %ignored.join(", "),
      "multiple framework tokens declared; first match wins"
    );
  }

  match recognized.first().copied() {
    Some(Framework::Arduino) => Selection {
      framework: Some(Framework::Arduino),
      defines: vec![Define::new(OLED_USE_ARDUINO, 1)],
      excluded_sources: BTreeSet::new(),
      message: "Using Arduino Wire adapter".to_string(),
    },
    Some(Framework::Stm32Cube) => Selection {
      framework: Some(Framework::Stm32Cube),
      defines: vec![
        Define::new(OLED_PLATFORM_STM32HAL, 1),
        Define::new(OLED_USE_STM32HAL, 1),
      ],
      excluded_sources: BTreeSet::from([ARDUINO_ADAPTER_SRC.to_string()]),
      message: "Using STM32 HAL I2C adapter".to_string(),
    },
    Some(Framework::EspIdf) => Selection {
      framework: Some(Framework::EspIdf),
      defines: vec![
        Define::new(OLED_PLATFORM_ESPIDF, 1),
        Define::new(OLED_USE_ESPIDF, 1),
      ],
      excluded_sources: BTreeSet::new(),
      message: "Using ESP-IDF I2C adapter (future)".to_string(),
    },
    None => Selection {
      framework: None,
      defines: Vec::new(),
      excluded_sources: BTreeSet::new(),
      message: "Unknown framework, platform auto-detection in headers".to_string(),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn arduino_emits_single_define() {
    let sel = select_framework(&["arduino"]);
    assert_eq!(sel.framework, Some(Framework::Arduino));
    assert_eq!(sel.defines, vec![Define::new(OLED_USE_ARDUINO, 1)]);
    assert!(sel.excluded_sources.is_empty());
    assert!(sel.message.contains("Arduino"));
  }

  #[test]
  fn arduino_wins_over_other_tokens() {
    // First match wins even when stm32cube is declared too
    let sel = select_framework(&["stm32cube", "arduino", "espidf"]);
    assert_eq!(sel.framework, Some(Framework::Arduino));
    assert_eq!(sel.defines, vec![Define::new(OLED_USE_ARDUINO, 1)]);
    assert!(sel.excluded_sources.is_empty());
  }

  #[test]
  fn stm32cube_excludes_wire_adapter() {
    let sel = select_framework(&["stm32cube"]);
    assert_eq!(sel.framework, Some(Framework::Stm32Cube));
    assert_eq!(
      sel.defines,
      vec![
        Define::new(OLED_PLATFORM_STM32HAL, 1),
        Define::new(OLED_USE_STM32HAL, 1),
      ]
    );
    assert_eq!(
      sel.excluded_sources,
      BTreeSet::from([ARDUINO_ADAPTER_SRC.to_string()])
    );
    assert!(sel.message.contains("STM32 HAL"));
  }

  #[test]
  fn espidf_emits_pair_without_exclusions() {
    let sel = select_framework(&["espidf"]);
    assert_eq!(sel.framework, Some(Framework::EspIdf));
    assert_eq!(sel.define_value(OLED_PLATFORM_ESPIDF), Some(1));
    assert_eq!(sel.define_value(OLED_USE_ESPIDF), Some(1));
    assert_eq!(sel.defines.len(), 2);
    assert!(sel.excluded_sources.is_empty());
    assert!(sel.message.contains("future"));
  }

  #[test]
  fn empty_input_falls_back() {
    let empty: [&str; 0] = [];
    let sel = select_framework(&empty);
    assert!(sel.is_fallback());
    assert!(sel.defines.is_empty());
    assert!(sel.excluded_sources.is_empty());
    assert!(sel.message.contains("auto-detection"));
  }

  #[test]
  fn unrecognized_tokens_fall_back() {
    let sel = select_framework(&["nrf52"]);
    assert!(sel.is_fallback());
    assert!(sel.defines.is_empty());
    assert!(sel.excluded_sources.is_empty());
  }

  #[test]
  fn selection_is_idempotent() {
    // Two calls with the same input yield identical records, no accumulation
    let first = select_framework(&["stm32cube"]);
    let second = select_framework(&["stm32cube"]);
    assert_eq!(first, second);
    assert_eq!(second.defines.len(), 2);
    assert_eq!(second.excluded_sources.len(), 1);
  }

  #[test]
  fn define_flag_rendering() {
    let define = Define::new(OLED_USE_ARDUINO, 1);
    assert_eq!(define.to_string(), "OLED_USE_ARDUINO=1");
    assert_eq!(define.as_flag(), "-DOLED_USE_ARDUINO=1");
  }

  #[test]
  fn enable_define_value() {
    let define = enable_define();
    assert_eq!(define.as_flag(), "-DOLED_SSD1315_ENABLE=1");
  }

  #[test]
  fn selection_serializes_to_json() {
    let sel = select_framework(&["stm32cube"]);
    let json = serde_json::to_string(&sel).unwrap();
    let back: Selection = serde_json::from_str(&json).unwrap();
    assert_eq!(sel, back);
    assert!(json.contains("\"stm32cube\""));
  }
}
