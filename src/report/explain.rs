//! Plain-language descriptions of each filter family.

use crate::filter::FilterFamily;

const BUTTERWORTH: &str = "\
Butterworth Low-Pass Filter
===========================

A low-pass filter passes signals below its cutoff frequency and attenuates
signals above it.

The Butterworth response is maximally flat: below the cutoff the output level
barely changes with frequency. The price is a gentle transition band, so
frequencies just above the cutoff are attenuated less than with a Chebyshev
design of the same order.

In the Pi topology, capacitors shunt high frequencies to ground while series
inductors oppose fast changes in current. Each added element steepens the
roll-off by about 6 dB per octave.

Pick Butterworth when a flat passband matters more than a sharp cutoff.
";

const CHEBYSHEV: &str = "\
Chebyshev Low-Pass Filter
=========================

A low-pass filter passes signals below its cutoff frequency and attenuates
signals above it.

The Chebyshev response allows a small, controlled ripple in the passband in
exchange for a much steeper transition above the cutoff. The ripple setting,
in dB, sets the trade: more ripple buys a sharper skirt.

  0.01 dB   nearly flat, modest steepness
  0.1 dB    good balance for most RF work
  0.5 dB    sharper cutoff, noticeable ripple
  1.0 dB    very sharp cutoff, visible ripple

Odd orders give identical input and output elements. Even orders are not
symmetric and strictly expect a load impedance different from the source.

Pick Chebyshev when harmonic rejection close to the cutoff matters most.
";

const BESSEL: &str = "\
Bessel Low-Pass Filter
======================

A low-pass filter passes signals below its cutoff frequency and attenuates
signals above it.

The Bessel response has maximally flat group delay: all frequencies in the
passband are delayed by almost the same amount, so pulse shapes and square
edges pass with very little overshoot or ringing. Its amplitude roll-off is
the gentlest of the three families.

Element values here are normalized to the 3 dB cutoff, and grow steadily from
the input end toward the output end of the ladder.

Pick Bessel for pulse, data or video paths where waveform fidelity matters
more than stopband rejection.
";

/// Narrative description of `family`.
pub fn explain(family: FilterFamily) -> &'static str {
    match family {
        FilterFamily::Butterworth => BUTTERWORTH,
        FilterFamily::Chebyshev => CHEBYSHEV,
        FilterFamily::Bessel => BESSEL,
    }
}
