//! Input polling task
//!
//! Builds the driver graph on the task's stack and runs the poller from
//! a fast ticker. The poller does its own interval gating; the ticker
//! only sets the granularity of the gate.

use core::cell::RefCell;

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Ticker};

use pollen_core::aggregate::{Average, KeepLast};
use pollen_core::config::InputConfig;
use pollen_core::{Aggregator, CompositeDriver, Poller};
use pollen_drivers::adapter::{HalI2c, HalInput};
use pollen_drivers::{AnalogPinDriver, DigitalPinDriver, Sht3xDriver};

use crate::board::{BoardAdc, EmbassyClock};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 10;

/// Samples averaged for the light level
const LIGHT_WINDOW: usize = 4;

/// SHT3x, light sensor and button
const BOARD_SENSORS: usize = 3;

/// Hardware handed to the input task
pub struct InputParts {
    /// I2C bus with the SHT3x
    pub i2c: I2c<'static, I2C0, i2c::Blocking>,
    /// ADC with the light sensor channel registered
    pub adc: BoardAdc,
    /// Push button
    pub button: Input<'static>,
}

/// Input task - polls all sensors and logs every change
#[embassy_executor::task]
pub async fn input_task(parts: InputParts, config: InputConfig) {
    info!(
        "Input task started: {} ({} sensors, {}ms)",
        config.label.as_str(),
        config.sensors.len(),
        config.poller.interval_ms
    );

    let (Some(address), Some(light_pin), Some((button_pin, inverted))) = (
        config.find_sht3x(),
        config.find_analog_pin(),
        config.find_digital_pin(),
    ) else {
        error!("Input config does not match this board layout");
        return;
    };
    if config.sensors.len() > BOARD_SENSORS {
        warn!(
            "Board wires {} sensors, ignoring {} extra",
            BOARD_SENSORS,
            config.sensors.len() - BOARD_SENSORS
        );
    }
    info!(
        "SHT3x at {=u8:#x}, light on GPIO{}, button on GPIO{}",
        address, light_pin, button_pin
    );

    let bus = RefCell::new(HalI2c::new(parts.i2c));
    let adc = RefCell::new(parts.adc);
    let button = HalInput::new(parts.button);

    let temperature = RefCell::new(KeepLast::<i16>::new());
    let humidity = RefCell::new(KeepLast::<u16>::new());
    let light = RefCell::new(Average::<u16, LIGHT_WINDOW>::new());
    let pressed = RefCell::new(KeepLast::<bool>::new());

    let mut sht = Sht3xDriver::new(&bus, address, &temperature, &humidity);
    let mut ldr = AnalogPinDriver::new(&adc, light_pin, &light);
    let mut key = DigitalPinDriver::new(&button, inverted, &pressed);

    let mut on_change = || {
        info!(
            "T={}C RH={}% light={} pressed={}",
            temperature.borrow().get(),
            humidity.borrow().get(),
            light.borrow().get(),
            pressed.borrow().get()
        );
    };

    let composite = CompositeDriver::new([&mut sht, &mut ldr, &mut key]);
    let clock = EmbassyClock;
    let mut poller = Poller::with_config(composite, &clock, &config.poller);
    poller.set_callback(&mut on_change);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    loop {
        poller.update();
        ticker.next().await;
    }
}
