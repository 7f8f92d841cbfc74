#![no_std]
#![no_main]

use bsp::entry;
use defmt::*;
use defmt_rtt as _;
use embedded_hal_0_2::adc::OneShot;
use panic_probe as _;

// Provide an alias for our BSP so we can switch targets quickly.
use rp_pico as bsp;

use bsp::hal::{
    adc::{Adc, AdcPin},
    clocks::init_clocks_and_plls,
    gpio::bank0::{Gpio26, Gpio27},
    gpio::{FunctionSioInput, Pin, PullNone},
    pac,
    watchdog::Watchdog,
    Sio, Timer,
};
use thermolight_rs::lcd::Lcd;
use thermolight_rs::pins::{LCD_D4, LCD_D5, LCD_D6, LCD_D7, LCD_EN, LCD_RS, LDR_PIN, TEMP_PIN};
use thermolight_rs::scheduler::DisplayScheduler;
use thermolight_rs::sensors::{AnalogSource, Channel};

type TempPin = AdcPin<Pin<Gpio26, FunctionSioInput, PullNone>>;
type LdrPin = AdcPin<Pin<Gpio27, FunctionSioInput, PullNone>>;

/// Both sensors on the RP2040 ADC
struct BoardAdc {
    adc: Adc,
    temperature: TempPin,
    light: LdrPin,
}

impl AnalogSource for BoardAdc {
    fn read_analog(&mut self, channel: Channel) -> u16 {
        let raw: u16 = match channel {
            Channel::Temperature => {
                nb::block!(OneShot::<Adc, u16, _>::read(&mut self.adc, &mut self.temperature))
                    .unwrap()
            }
            Channel::Light => {
                nb::block!(OneShot::<Adc, u16, _>::read(&mut self.adc, &mut self.light)).unwrap()
            }
        };
        // 12-bit conversion, scaled to the 10-bit range the calibration expects
        raw >> 2
    }
}

#[entry]
fn main() -> ! {
    info!("ThermoLight Starting");
    // Grab our singleton objects
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
    let clocks = init_clocks_and_plls(
        bsp::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The single-cycle I/O block controls our GPIO pins
    let sio = Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut delay = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // Set up the LCD
    info!(
        "LCD on RS=GP{} EN=GP{} D4-D7=GP{},GP{},GP{},GP{}",
        LCD_RS, LCD_EN, LCD_D4, LCD_D5, LCD_D6, LCD_D7
    );
    let mut lcd = Lcd::new(
        pins.gpio7.into_push_pull_output(),
        pins.gpio6.into_push_pull_output(),
        pins.gpio5.into_push_pull_output(),
        pins.gpio4.into_push_pull_output(),
        pins.gpio3.into_push_pull_output(),
        pins.gpio2.into_push_pull_output(),
        delay,
    );
    lcd.init().unwrap();

    // Set up the sensors
    info!("Temperature on GP{}, light on GP{}", TEMP_PIN, LDR_PIN);
    let mut board_adc = BoardAdc {
        adc: Adc::new(pac.ADC, &mut pac.RESETS),
        temperature: AdcPin::new(pins.gpio26.into_floating_input()).unwrap(),
        light: AdcPin::new(pins.gpio27.into_floating_input()).unwrap(),
    };

    let mut scheduler = DisplayScheduler::new();

    info!("ThermoLight Ready");

    loop {
        let mode = scheduler.mode();
        match scheduler.run_cycle(&mut lcd, &mut board_adc, &mut delay) {
            Ok(readings) => info!("{}: {}", mode, readings),
            Err(e) => error!("Failed to render {}: {}", mode, e),
        }
    }
}
