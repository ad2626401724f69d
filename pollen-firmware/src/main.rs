//! Pollen - Input polling firmware
//!
//! Main firmware binary for RP2040-based boards. Samples an SHT3x
//! temperature/humidity sensor, a light-dependent resistor and a push
//! button as one input set, at the configured interval.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use {defmt_rtt as _, panic_probe as _};

use pollen_core::config::InputConfig;

use crate::board::BoardAdc;

mod board;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pollen firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = InputConfig::default();
    if let Err(e) = config.validate() {
        error!("Invalid input config: {}", e);
        return;
    }
    info!("Configuration loaded");

    // Setup I2C0 for the SHT3x
    // Pin assignment is board-specific (Pico: SDA=GPIO4, SCL=GPIO5)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = pollen_hal::I2cConfig::STANDARD.frequency;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    info!("I2C initialized");

    // Setup ADC for the light sensor (ADC0: GPIO26)
    let mut adc = BoardAdc::new(Adc::new_blocking(p.ADC, Default::default()));
    if !adc.add_channel(26, Channel::new_pin(p.PIN_26, Pull::None)) {
        warn!("No room for ADC channel GPIO26");
    }

    // Setup push button (GPIO15 to ground, internal pull-up)
    let button = Input::new(p.PIN_15, Pull::Up);

    spawner
        .spawn(tasks::input_task(
            tasks::InputParts { i2c, adc, button },
            config,
        ))
        .unwrap();

    info!("All tasks spawned");
}
