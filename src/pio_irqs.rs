//! PIO interrupt bindings used by [`marquee!`](crate::marquee!).
#![allow(unsafe_code, reason = "bind_interrupts! expands to interrupt handler definitions")]

use embassy_rp::interrupt::typelevel::Binding;
use embassy_rp::pio::{Instance, InterruptHandler};

embassy_rp::bind_interrupts! {
    /// Interrupt binding for `PIO0`.
    pub struct Pio0Irqs {
        PIO0_IRQ_0 => InterruptHandler<embassy_rp::peripherals::PIO0>;
    }
}

embassy_rp::bind_interrupts! {
    /// Interrupt binding for `PIO1`.
    pub struct Pio1Irqs {
        PIO1_IRQ_0 => InterruptHandler<embassy_rp::peripherals::PIO1>;
    }
}

#[cfg(feature = "pico2")]
embassy_rp::bind_interrupts! {
    /// Interrupt binding for `PIO2` (Pico 2 only).
    pub struct Pio2Irqs {
        PIO2_IRQ_0 => InterruptHandler<embassy_rp::peripherals::PIO2>;
    }
}

/// A PIO block that can drive the marquee's LED strip.
#[doc(hidden)] // Required pub for macro expansion in downstream crates
pub trait MarqueePio: Instance {
    /// The interrupt binding type for this PIO.
    type Irqs: Binding<<Self as Instance>::Interrupt, InterruptHandler<Self>>;

    /// The interrupt binding value passed to `Pio::new`.
    fn irqs() -> Self::Irqs;
}

impl MarqueePio for embassy_rp::peripherals::PIO0 {
    type Irqs = Pio0Irqs;

    fn irqs() -> Self::Irqs {
        Pio0Irqs
    }
}

impl MarqueePio for embassy_rp::peripherals::PIO1 {
    type Irqs = Pio1Irqs;

    fn irqs() -> Self::Irqs {
        Pio1Irqs
    }
}

#[cfg(feature = "pico2")]
impl MarqueePio for embassy_rp::peripherals::PIO2 {
    type Irqs = Pio2Irqs;

    fn irqs() -> Self::Irqs {
        Pio2Irqs
    }
}
