//! Pad interrupt routing
//!
//! Sixteen pads can raise GPIO interrupts. Each is wired to one of the
//! shared interrupt lines through that line's `S_INTR_n_SEL` selector: the
//! selector holds a small value naming which of its candidate pads drives
//! the line. A line's trigger type and polarity are then chosen by bit `n`
//! of `GPIO_INTR_TYPE` and `GPIO_INTR_POL`.
//!
//! # Routing table
//!
//! | Pad | Line | Selector value |
//! |-----|------|----------------|
//! |   6 |    1 | 2 |
//! |   9 |    3 | 2 |
//! |  11 |    5 | 1 |
//! |  14 |    5 | 2 |
//! |  18 |    1 | 3 |
//! |  21 |    2 | 3 |
//! |  22 |    3 | 3 |
//! |  23 |    7 | 2 |
//! |  24 |    1 | 4 |
//! |  26 |    4 | 3 |
//! |  28 |    3 | 4 |
//! |  30 |    5 | 4 |
//! |  31 |    6 | 3 |
//! |  36 |    1 | 6 |
//! |  38 |    2 | 6 |
//! |  45 |    5 | 5 |
//!
//! A selector holds one binding at a time. Routing a second pad onto the
//! same line replaces the first.
//!
//! Enabling the line at the interrupt controller and attaching a handler
//! is left to the caller.

use heapless::Vec;
use ql_hal::irq::{IrqError, IrqLine, IrqSourceConfig, Polarity, TriggerType};

use crate::pads::{Pad, PadConfig};
use crate::regs::{IntrSel, Reg, RegisterAccess};

/// Number of pads that can be routed to an interrupt line
pub const ROUTE_COUNT: usize = 16;

/// Most pads that share a single interrupt line
pub const MAX_PADS_PER_LINE: usize = 8;

/// Fixed wiring of one interrupt-capable pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntrRoute {
    /// Interrupt-capable pad
    pub pad: Pad,
    /// Selector register that picks the pad
    pub sel: IntrSel,
    /// Value the selector must hold for this pad
    pub value: u32,
    /// Interrupt line the pad drives once selected
    pub line: IrqLine,
}

const fn route(pad: u8, line: u8, value: u32) -> IntrRoute {
    let line = match IrqLine::new(line) {
        Some(line) => line,
        None => panic!("interrupt line out of range"),
    };
    IntrRoute {
        pad: Pad(pad),
        sel: IntrSel(line.number()),
        value,
        line,
    }
}

/// Every interrupt-capable pad, in pad order
pub static ROUTES: [IntrRoute; ROUTE_COUNT] = [
    route(6, 1, 2),
    route(9, 3, 2),
    route(11, 5, 1),
    route(14, 5, 2),
    route(18, 1, 3),
    route(21, 2, 3),
    route(22, 3, 3),
    route(23, 7, 2),
    route(24, 1, 4),
    route(26, 4, 3),
    route(28, 3, 4),
    route(30, 5, 4),
    route(31, 6, 3),
    route(36, 1, 6),
    route(38, 2, 6),
    route(45, 5, 5),
];

/// Look up the interrupt wiring of `pad`
///
/// Returns `None` if the pad cannot raise interrupts.
pub fn route_for(pad: Pad) -> Option<&'static IntrRoute> {
    ROUTES.iter().find(|r| r.pad == pad)
}

/// Pads that can be routed onto `line`
pub fn pads_for_line(line: IrqLine) -> Vec<Pad, MAX_PADS_PER_LINE> {
    let mut pads = Vec::new();
    for r in ROUTES.iter().filter(|r| r.line == line) {
        if pads.push(r.pad).is_err() {
            break;
        }
    }
    pads
}

/// GPIO interrupt configuration request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioIntrConfig {
    /// Pad configuration supplying the active pad
    pub pad: PadConfig,
    /// Level or edge triggered
    pub trigger: TriggerType,
    /// Falling/low or rising/high
    pub polarity: Polarity,
}

impl GpioIntrConfig {
    /// Create a configuration request
    pub const fn new(pad: PadConfig, trigger: TriggerType, polarity: Polarity) -> Self {
        Self {
            pad,
            trigger,
            polarity,
        }
    }
}

/// Route the configured pad onto its interrupt line
///
/// Writes the pad's selector value, then updates only the line's bit in
/// `GPIO_INTR_TYPE` and `GPIO_INTR_POL`.
///
/// # Returns
/// The interrupt line now driven by the pad, or
/// [`IrqError::InvalidArgument`] if the pad is not interrupt-capable. No
/// register is written in the error case.
pub fn configure<R: RegisterAccess>(
    regs: &mut R,
    cfg: &GpioIntrConfig,
) -> Result<IrqLine, IrqError> {
    let pad = cfg.pad.pin;
    let Some(route) = route_for(pad) else {
        #[cfg(feature = "defmt")]
        defmt::warn!("Pad {} cannot raise GPIO interrupts", pad.number());
        return Err(IrqError::InvalidArgument);
    };

    #[cfg(feature = "defmt")]
    warn_on_override(regs, route);

    regs.write(Reg::IntrSel(route.sel), route.value);

    let bit = route.line.number();
    regs.write_bit(Reg::IntrType, bit, cfg.trigger.bit());
    regs.write_bit(Reg::IntrPol, bit, cfg.polarity.bit());

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "Pad {} -> GPIO IRQ {} ({}, {})",
        pad.number(),
        bit,
        cfg.trigger,
        cfg.polarity
    );

    Ok(route.line)
}

#[cfg(feature = "defmt")]
fn warn_on_override<R: RegisterAccess>(regs: &R, route: &IntrRoute) {
    let previous = regs.read(Reg::IntrSel(route.sel));
    if previous != 0 && previous != route.value {
        defmt::warn!(
            "S_INTR_{}_SEL: selector value {} replaced by pad {}",
            route.sel.index(),
            previous,
            route.pad.number()
        );
    }
}

/// Trigger type currently programmed for `line`
pub fn trigger_of<R: RegisterAccess>(regs: &R, line: IrqLine) -> TriggerType {
    TriggerType::from_bit(regs.read_bit(Reg::IntrType, line.number()))
}

/// Polarity currently programmed for `line`
pub fn polarity_of<R: RegisterAccess>(regs: &R, line: IrqLine) -> Polarity {
    Polarity::from_bit(regs.read_bit(Reg::IntrPol, line.number()))
}

/// Value currently held by selector `sel`
pub fn selected_value<R: RegisterAccess>(regs: &R, sel: IntrSel) -> u32 {
    regs.read(Reg::IntrSel(sel))
}

/// Pad currently selected onto `line`, if the selector holds a known value
pub fn selected_pad<R: RegisterAccess>(regs: &R, line: IrqLine) -> Option<Pad> {
    let value = selected_value(regs, IntrSel(line.number()));
    ROUTES
        .iter()
        .find(|r| r.line == line && r.value == value)
        .map(|r| r.pad)
}

/// EOS S3 interrupt-source configurator
///
/// Implements [`IrqSourceConfig`] on top of any register access.
#[derive(Debug)]
pub struct Eoss3Irq<R> {
    regs: R,
}

impl<R: RegisterAccess> Eoss3Irq<R> {
    /// Create a configurator over `regs`
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Register access used by this configurator
    pub fn regs(&self) -> &R {
        &self.regs
    }

    /// Give back the register access
    pub fn release(self) -> R {
        self.regs
    }
}

impl<R: RegisterAccess> IrqSourceConfig for Eoss3Irq<R> {
    type Pad = Pad;

    fn configure_irq(
        &mut self,
        pad: Pad,
        trigger: TriggerType,
        polarity: Polarity,
    ) -> Result<IrqLine, IrqError> {
        let cfg = GpioIntrConfig::new(PadConfig::new(pad), trigger, polarity);
        configure(&mut self.regs, &cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::SimRegisters;
    use proptest::prelude::*;

    fn cfg(pad: u8, trigger: TriggerType, polarity: Polarity) -> GpioIntrConfig {
        GpioIntrConfig::new(PadConfig::new(Pad(pad)), trigger, polarity)
    }

    fn line(n: u8) -> IrqLine {
        IrqLine::new(n).unwrap()
    }

    #[test]
    fn test_pad6_edge_rising() {
        let mut regs = SimRegisters::new();

        let result = configure(&mut regs, &cfg(6, TriggerType::Edge, Polarity::RiseHigh));

        assert_eq!(result, Ok(line(1)));
        assert_eq!(regs.read(Reg::IntrSel(IntrSel(1))), 2);
        assert_eq!(regs.read(Reg::IntrType), 1 << 1);
        assert_eq!(regs.read(Reg::IntrPol), 1 << 1);
    }

    #[test]
    fn test_pad38_routes_to_line2() {
        let mut regs = SimRegisters::new();

        let result = configure(&mut regs, &cfg(38, TriggerType::Level, Polarity::FallLow));

        assert_eq!(result, Ok(line(2)));
        assert_eq!(selected_value(&regs, IntrSel(2)), 6);
        assert_eq!(trigger_of(&regs, line(2)), TriggerType::Level);
        assert_eq!(polarity_of(&regs, line(2)), Polarity::FallLow);
    }

    #[test]
    fn test_route_table_shape() {
        for r in ROUTES.iter() {
            assert_eq!(r.sel.index(), r.line.number());
            assert!((1..=7).contains(&r.line.number()));
            assert_eq!(route_for(r.pad), Some(r));
        }

        // Pad order, no duplicates
        for pair in ROUTES.windows(2) {
            assert!(pair[0].pad < pair[1].pad);
        }

        // Each (line, value) pair names exactly one pad
        for r in ROUTES.iter() {
            let same = ROUTES
                .iter()
                .filter(|o| o.line == r.line && o.value == r.value)
                .count();
            assert_eq!(same, 1);
        }
    }

    #[test]
    fn test_unsupported_pads() {
        let unsupported = Pad::all().filter(|p| route_for(*p).is_none()).count();
        assert_eq!(unsupported, 46 - ROUTE_COUNT);

        assert!(route_for(Pad(0)).is_none());
        assert!(route_for(Pad(7)).is_none());
        assert!(route_for(Pad(44)).is_none());
    }

    #[test]
    fn test_pads_for_line() {
        let pads = pads_for_line(line(1));
        assert_eq!(pads.as_slice(), &[Pad(6), Pad(18), Pad(24), Pad(36)]);

        let pads = pads_for_line(line(5));
        assert_eq!(pads.as_slice(), &[Pad(11), Pad(14), Pad(30), Pad(45)]);

        assert!(pads_for_line(line(0)).is_empty());
    }

    #[test]
    fn test_second_pad_overrides_selector() {
        let mut regs = SimRegisters::new();

        configure(&mut regs, &cfg(6, TriggerType::Edge, Polarity::RiseHigh)).unwrap();
        assert_eq!(selected_pad(&regs, line(1)), Some(Pad(6)));

        configure(&mut regs, &cfg(36, TriggerType::Level, Polarity::FallLow)).unwrap();
        assert_eq!(selected_pad(&regs, line(1)), Some(Pad(36)));
        assert_eq!(trigger_of(&regs, line(1)), TriggerType::Level);
        assert_eq!(polarity_of(&regs, line(1)), Polarity::FallLow);
    }

    #[test]
    fn test_lines_are_independent() {
        let mut regs = SimRegisters::new();

        configure(&mut regs, &cfg(23, TriggerType::Edge, Polarity::RiseHigh)).unwrap();
        configure(&mut regs, &cfg(26, TriggerType::Edge, Polarity::FallLow)).unwrap();
        configure(&mut regs, &cfg(23, TriggerType::Level, Polarity::RiseHigh)).unwrap();

        assert_eq!(regs.read(Reg::IntrType), 1 << 4);
        assert_eq!(regs.read(Reg::IntrPol), 1 << 7);
    }

    #[test]
    fn test_selected_pad_unknown_value() {
        let mut regs = SimRegisters::new();
        assert_eq!(selected_pad(&regs, line(3)), None);

        regs.write(Reg::IntrSel(IntrSel(3)), 9);
        assert_eq!(selected_pad(&regs, line(3)), None);
    }

    #[test]
    fn test_irq_source_config_trait() {
        fn route_button<C: IrqSourceConfig<Pad = Pad>>(c: &mut C) -> Result<IrqLine, IrqError> {
            c.configure_irq(Pad(45), TriggerType::Edge, Polarity::FallLow)
        }

        let mut irq = Eoss3Irq::new(SimRegisters::new());
        assert_eq!(route_button(&mut irq), Ok(line(5)));
        assert_eq!(selected_value(irq.regs(), IntrSel(5)), 5);

        let err = irq.configure_irq(Pad(1), TriggerType::Edge, Polarity::RiseHigh);
        assert_eq!(err.map_err(IrqError::errno), Err(-22));
    }

    fn trigger() -> impl Strategy<Value = TriggerType> {
        prop_oneof![Just(TriggerType::Level), Just(TriggerType::Edge)]
    }

    fn polarity() -> impl Strategy<Value = Polarity> {
        prop_oneof![Just(Polarity::FallLow), Just(Polarity::RiseHigh)]
    }

    fn seeded(type_bits: u32, pol_bits: u32, sel: u32) -> SimRegisters {
        let mut regs = SimRegisters::new();
        regs.write(Reg::IntrType, type_bits);
        regs.write(Reg::IntrPol, pol_bits);
        for n in 0..8 {
            regs.write(Reg::IntrSel(IntrSel(n)), sel);
        }
        regs
    }

    proptest! {
        #[test]
        fn supported_pad_touches_only_its_line(
            idx in 0..ROUTE_COUNT,
            type_bits in any::<u32>(),
            pol_bits in any::<u32>(),
            sel in any::<u32>(),
            t in trigger(),
            p in polarity(),
        ) {
            let r = ROUTES[idx];
            let mut regs = seeded(type_bits, pol_bits, sel);

            let result = configure(&mut regs, &cfg(r.pad.number(), t, p));

            prop_assert_eq!(result, Ok(r.line));
            prop_assert_eq!(selected_value(&regs, r.sel), r.value);
            prop_assert_eq!(trigger_of(&regs, r.line), t);
            prop_assert_eq!(polarity_of(&regs, r.line), p);

            let others = !r.line.mask();
            prop_assert_eq!(regs.read(Reg::IntrType) & others, type_bits & others);
            prop_assert_eq!(regs.read(Reg::IntrPol) & others, pol_bits & others);
            for n in (0..8).filter(|n| *n != r.sel.index()) {
                prop_assert_eq!(regs.read(Reg::IntrSel(IntrSel(n))), sel);
            }
        }

        #[test]
        fn unsupported_pad_touches_nothing(
            pad in 0u8..46,
            type_bits in any::<u32>(),
            pol_bits in any::<u32>(),
            sel in any::<u32>(),
            t in trigger(),
            p in polarity(),
        ) {
            prop_assume!(route_for(Pad(pad)).is_none());
            let mut regs = seeded(type_bits, pol_bits, sel);
            let before = regs.clone();

            let result = configure(&mut regs, &cfg(pad, t, p));

            prop_assert_eq!(result, Err(IrqError::InvalidArgument));
            prop_assert_eq!(regs, before);
        }

        #[test]
        fn configure_is_idempotent(
            idx in 0..ROUTE_COUNT,
            type_bits in any::<u32>(),
            pol_bits in any::<u32>(),
            t in trigger(),
            p in polarity(),
        ) {
            let c = cfg(ROUTES[idx].pad.number(), t, p);
            let mut regs = seeded(type_bits, pol_bits, 0);

            let first = configure(&mut regs, &c);
            let after_first = regs.clone();
            let second = configure(&mut regs, &c);

            prop_assert_eq!(first, second);
            prop_assert_eq!(regs, after_first);
        }
    }
}
