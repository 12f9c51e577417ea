#![no_std]
#![no_main]

use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    clocks::init_clocks_and_plls, pac, pio::PIOExt, watchdog::Watchdog, Clock, Sio, Timer,
};
use ws2812_pio::Ws2812;

use rp_pico_demo::clock::PedestalClock;
use rp_pico_demo::pad::{CortexInterrupts, SioPad};
use rp_pico_demo::strip::Ws2812Strip;
use shrine_lights::{
    SequenceConfig, ShrineSequencer, TouchConfig, TouchSensor, DEFAULT_LED_COUNT,
};

#[entry]
fn main() -> ! {
    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    // Set the pins to their default state
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Touch pad on GPIO14, drive/reference on GPIO15, joined through 1 MOhm.
    // Putting them into SIO output mode sets the funcsel; the pad backend
    // owns their OE/OUT bits from here on.
    let _sense = pins.gpio14.into_push_pull_output();
    let _reference = pins.gpio15.into_push_pull_output();
    let pad = SioPad::new(14, 15);
    let sensor = TouchSensor::new(pad, CortexInterrupts, TouchConfig::DEFAULT);

    // WS2812 data on GPIO12 via PIO
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let ws = Ws2812::new(
        pins.gpio12.into_function(),
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
        timer.count_down(),
    );

    // The timer doubles as the hold delay; rp2040-hal's Timer is Copy.
    let strip: Ws2812Strip<_, _, DEFAULT_LED_COUNT> = Ws2812Strip::new(ws, timer);

    let pedestal_clock = PedestalClock::new(timer);
    let mut sequencer: ShrineSequencer<_, _, _, _, DEFAULT_LED_COUNT> = ShrineSequencer::new(
        strip,
        sensor,
        &pedestal_clock,
        SequenceConfig::DEFAULT,
    );

    loop {
        sequencer.service();
    }
}
