//! One-shot hardware peripheral initialization and raw I/O helpers.
//!
//! Configures the three ADC1 channels and the pump GPIO using raw ESP-IDF
//! sys calls. `init_peripherals()` is called once from `main()` before the
//! cycle loop starts.
//!
//! On host targets the helpers read and write in-memory simulation state
//! instead, which tests and simulations inject through the `sim_*`
//! functions.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicI32, AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during peripheral initialization or raw I/O.
/// Carries the ESP-IDF return code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    AdcReadFailed(i32),
    GpioConfigFailed(i32),
    GpioWriteFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc)    => write!(f, "ADC1 init failed (rc={})", rc),
            Self::AdcReadFailed(rc)    => write!(f, "ADC1 read failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::GpioWriteFailed(rc)  => write!(f, "GPIO write failed (rc={})", rc),
        }
    }
}

impl core::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the cycle loop; single-threaded.
    unsafe {
        init_adc()?;
        init_pump_output()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    SIM_PUMP_LEVEL.store(false, Ordering::Relaxed);
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path.  No concurrent access is possible because
/// `init_adc()` completes before the cycle loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for ch in [pins::SOIL_MOISTURE_ADC_CH, pins::TEMPERATURE_ADC_CH, pins::GAS_ADC_CH] {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), ch, &chan_cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }
    }

    info!(
        "hw_init: ADC1 configured (CH{}=moisture, CH{}=temp, CH{}=gas)",
        pins::SOIL_MOISTURE_ADC_CH, pins::TEMPERATURE_ADC_CH, pins::GAS_ADC_CH
    );
    Ok(())
}

/// One conversion on ADC1 `channel`, scaled to the 10-bit range.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> Result<u16, HwInitError> {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcReadFailed(ret));
    }
    Ok((raw.max(0) as u16) >> (pins::ADC_NATIVE_BITS - pins::ADC_REPORTED_BITS))
}

#[cfg(not(target_os = "espidf"))]
static SIM_ADC: [AtomicU16; 8] = [const { AtomicU16::new(0) }; 8];

/// Simulated ESP-IDF return code for the next ADC reads (0 = ESP_OK).
#[cfg(not(target_os = "espidf"))]
static SIM_ADC_RC: AtomicI32 = AtomicI32::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(channel: u32) -> Result<u16, HwInitError> {
    let rc = SIM_ADC_RC.load(Ordering::Relaxed);
    if rc != 0 {
        return Err(HwInitError::AdcReadFailed(rc));
    }
    Ok(SIM_ADC[channel as usize % SIM_ADC.len()].load(Ordering::Relaxed))
}

/// Inject the raw (already 10-bit) value returned for ADC1 `channel`.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc(channel: u32, raw: u16) {
    SIM_ADC[channel as usize % SIM_ADC.len()].store(raw, Ordering::Relaxed);
}

/// Make subsequent ADC reads fail with `rc`; `0` restores normal reads.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc_error(rc: i32) {
    SIM_ADC_RC.store(rc, Ordering::Relaxed);
}

// ── GPIO output (pump) ────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_pump_output() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::PUMP_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
    // Pump starts off.
    let ret = unsafe { gpio_set_level(pins::PUMP_GPIO, 0) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioWriteFailed(ret)); }

    info!("hw_init: pump GPIO{} configured LOW", pins::PUMP_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) -> Result<(), HwInitError> {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_pump_output(). Main-loop only.
    let ret = unsafe { gpio_set_level(pin, u32::from(high)) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioWriteFailed(ret));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
static SIM_PUMP_LEVEL: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, high: bool) -> Result<(), HwInitError> {
    SIM_PUMP_LEVEL.store(high, Ordering::Relaxed);
    Ok(())
}

/// Last level written to the simulated pump line.
#[cfg(not(target_os = "espidf"))]
pub fn sim_pump_level() -> bool {
    SIM_PUMP_LEVEL.load(Ordering::Relaxed)
}
