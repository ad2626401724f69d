//! End-to-end polling: poller -> composite -> leaf drivers -> fakes

use core::cell::{Cell, RefCell};

use pollen_core::aggregate::{Average, KeepLast};
use pollen_core::config::InputConfig;
use pollen_core::{Aggregator, CompositeDriver, PollOutcome, Poller};
use pollen_drivers::sensor::sht3x::{crc8, DEFAULT_ADDRESS, RESPONSE_LEN};
use pollen_drivers::{AnalogPinDriver, DigitalPinDriver, Sht3xDriver};
use pollen_hal::{AnalogPins, Clock, I2cBus, I2cError, InputPin};

struct FakeClock(Cell<u32>);

impl FakeClock {
    fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

struct FakeAdc {
    value: u16,
}

impl AnalogPins for FakeAdc {
    fn read_pin(&mut self, _pin: u8) -> u16 {
        self.value
    }
}

struct FakeButton(Cell<bool>);

impl InputPin for FakeButton {
    fn is_high(&self) -> bool {
        self.0.get()
    }
}

/// One SHT3x on the bus; `online = false` simulates an unplugged sensor
struct FakeBus {
    online: bool,
    temperature: u16,
    humidity: u16,
    transactions: u32,
}

impl I2cBus for FakeBus {
    type Error = I2cError;

    fn write(&mut self, address: u8, _data: &[u8]) -> Result<(), I2cError> {
        self.transactions += 1;
        if !self.online || address != DEFAULT_ADDRESS {
            return Err(I2cError::AddressNack);
        }
        Ok(())
    }

    fn read(&mut self, _address: u8, buf: &mut [u8]) -> Result<(), I2cError> {
        let t = self.temperature.to_be_bytes();
        let h = self.humidity.to_be_bytes();
        let response: [u8; RESPONSE_LEN] = [t[0], t[1], crc8(&t), h[0], h[1], crc8(&h)];
        buf.copy_from_slice(&response);
        Ok(())
    }

    fn write_read(&mut self, address: u8, data: &[u8], buf: &mut [u8]) -> Result<(), I2cError> {
        self.write(address, data)?;
        self.read(address, buf)
    }
}

#[test]
fn test_full_input_set() {
    let config = InputConfig::default();
    config.validate().unwrap();

    let clock = FakeClock(Cell::new(0));
    let bus = RefCell::new(FakeBus {
        online: true,
        temperature: 65535,
        humidity: 0,
        transactions: 0,
    });
    let adc = RefCell::new(FakeAdc { value: 512 });
    let button = FakeButton(Cell::new(true));

    // Aggregators live outside the drivers so they stay readable
    let temperature = RefCell::new(KeepLast::<i16>::new());
    let humidity = RefCell::new(KeepLast::<u16>::new());
    let light = RefCell::new(Average::<u16, 2>::new());
    let pressed = RefCell::new(KeepLast::<bool>::new());

    let mut sht = Sht3xDriver::new(
        &bus,
        config.find_sht3x().unwrap(),
        &temperature,
        &humidity,
    );
    let mut ldr = AnalogPinDriver::new(&adc, config.find_analog_pin().unwrap(), &light);
    let (pin, inverted) = config.find_digital_pin().unwrap();
    assert_eq!(pin, 15);
    let mut key = DigitalPinDriver::new(&button, inverted, &pressed);

    let notified = Cell::new(0u32);
    let mut on_change = || notified.set(notified.get() + 1);

    let composite = CompositeDriver::new([&mut sht, &mut ldr, &mut key]);
    let mut poller = Poller::with_config(composite, &clock, &config.poller);
    poller.set_callback(&mut on_change);

    // First cycle samples everything
    assert_eq!(poller.update(), PollOutcome::Changed);
    assert_eq!(notified.get(), 1);
    assert_eq!(temperature.borrow().get(), 130);
    assert_eq!(humidity.borrow().get(), 0);
    assert_eq!(light.borrow().get(), 512);
    // Button idles high, active-low -> not pressed
    assert!(!pressed.borrow().get());

    // Within the interval: nothing touches the hardware
    clock.advance(999);
    assert_eq!(poller.update(), PollOutcome::Waiting);
    assert_eq!(bus.borrow().transactions, 1);

    // Sensor drops off the bus, other channels still refresh
    bus.borrow_mut().online = false;
    adc.borrow_mut().value = 256;
    button.0.set(false);
    clock.advance(2);
    assert_eq!(poller.update(), PollOutcome::Changed);
    assert_eq!(notified.get(), 2);
    assert_eq!(temperature.borrow().get(), 130);
    assert_eq!(light.borrow().get(), (512 + 256) / 2);
    assert!(pressed.borrow().get());
    assert_eq!(bus.borrow().transactions, 2);
}

#[test]
fn test_offline_sensor_never_notifies() {
    let clock = FakeClock(Cell::new(0));
    let mut bus = FakeBus {
        online: false,
        temperature: 0,
        humidity: 0,
        transactions: 0,
    };
    let mut driver = Sht3xDriver::new(&mut bus, DEFAULT_ADDRESS, KeepLast::new(), KeepLast::new());

    let notified = Cell::new(false);
    let mut on_change = || notified.set(true);

    {
        let mut poller = Poller::with_interval(&mut driver, &clock, 100);
        poller.set_callback(&mut on_change);

        for _ in 0..10 {
            assert_ne!(poller.update(), PollOutcome::Changed);
            clock.advance(101);
        }
    }

    assert!(!notified.get());
    assert_eq!(driver.temperature_c(), 0);
    drop(driver);
    // One attempt per interval, no tight retry loop
    assert_eq!(bus.transactions, 10);
}

#[test]
fn test_composite_from_config_order() {
    let adc = RefCell::new(FakeAdc { value: 1 });
    let mut drivers = [
        AnalogPinDriver::new(&adc, 26, KeepLast::new()),
        AnalogPinDriver::new(&adc, 27, KeepLast::new()),
    ];

    let children = drivers
        .iter_mut()
        .map(|d| d as &mut dyn pollen_core::Driver);
    let mut composite = CompositeDriver::<2>::try_from_iter(children).unwrap();
    assert_eq!(composite.size(), 2);
    assert!(pollen_core::Driver::read(&mut composite));
    drop(composite);

    assert!(drivers.iter().all(|d| d.value() == 1));
}
