#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use embassy_executor::Spawner;
use led_marquee::{Result, marquee, marquee::MarqueeConfig};
use {defmt_rtt as _, panic_probe as _};

const MARQUEE_CONFIG: MarqueeConfig<'static> = MarqueeConfig::DEFAULT;

// A 30×5 serpentine panel on PIN_4, driven by PIO0 state machine 0 over DMA_CH0.
marquee! {
    Marquee30x5 {
        pin: PIN_4,
        pio: PIO0,
        dma: DMA_CH0,
        width: 30,
        height: 5,
        config: MARQUEE_CONFIG,
    }
}

// Two "mains" let us use Results.
#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let marquee30x5 = Marquee30x5::new(p.PIN_4, p.PIO0, p.DMA_CH0, spawner)?;
    defmt::info!(
        "marquee: {} LEDs, max brightness {}",
        Marquee30x5::LEN,
        Marquee30x5::MAX_BRIGHTNESS
    );

    marquee30x5.run().await
}
