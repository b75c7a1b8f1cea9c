//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements    | Connects to                   |
//! |-------------|---------------|-------------------------------|
//! | `hardware`  | AnalogSource  | ESP32 ADC1 (oneshot)          |
//! |             | DigitalSink   | Pump relay GPIO               |
//! | `hal_pin`   | DigitalSink   | Any embedded-hal `OutputPin`  |
//! | `log_sink`  | EventSink     | Serial log output             |
//! | `time`      | —             | ESP32 system timer            |

pub mod hal_pin;
pub mod hardware;
pub mod log_sink;
pub mod time;
