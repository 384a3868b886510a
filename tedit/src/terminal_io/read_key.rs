// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decodes the raw byte stream into [`KeyEvent`]s.
//!
//! The first byte of a key is awaited without a time limit. Every byte after that (the
//! tail of an escape sequence, or the continuation bytes of a UTF-8 character) is
//! awaited for at most `escape_timeout`, so a lone `Escape` press never hangs the loop:
//!
//! ```text
//! ESC ──(timeout)─────────────────────────▶ Escape
//!  │
//!  ├─ [ ─ params/intermediates ─ final ───▶ Up/Down/Right/Left for A/B/C/D,
//!  │                                        Unidentified otherwise
//!  ├─ O ─ final ──────────────────────────▶ Up/Down/Right/Left for A/B/C/D,
//!  │                                        Unidentified otherwise
//!  ├─ ESC ─ (repeats) ────────────────────▶ decoded as if only one ESC was read
//!  └─ any other byte ─────────────────────▶ Unidentified (Alt chord)
//! ```
//!
//! A CSI sequence is always consumed up to and including its final byte
//! (`0x40..=0x7E`), so the tail of an unknown sequence such as `ESC [ 3 ~` never leaks
//! into the buffer as text.

use std::time::Duration;

use crate::{DEBUG_TEDIT_INPUT, ESC, InputDevice, KeyEvent, ReadOutcome, SpecialKey};

/// Longest CSI parameter / intermediate run that is accepted before the sequence is
/// treated as garbage.
pub const MAX_CSI_SEQUENCE_LEN: usize = 32;

/// Reads one logical key from `device`.
///
/// # Errors
///
/// Returns an error if the device fails to read.
pub fn read_key(
    device: &mut impl InputDevice,
    escape_timeout: Duration,
) -> miette::Result<KeyEvent> {
    let first_byte = loop {
        match device.read_byte(None)? {
            ReadOutcome::Byte(byte) => break byte,
            ReadOutcome::Interrupted(signal) => return Ok(KeyEvent::Interrupted(signal)),
            ReadOutcome::Eof => return Ok(KeyEvent::InputClosed),
            ReadOutcome::TimedOut => {}
        }
    };

    let key = match first_byte {
        ESC => decode_escape_sequence(device, escape_timeout)?,
        0x00..=0x7f => KeyEvent::Char(char::from(first_byte)),
        0xc2..=0xf4 => decode_utf8(device, first_byte, escape_timeout)?,
        _ => KeyEvent::Unidentified,
    };

    DEBUG_TEDIT_INPUT.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "read_key", first_byte, key = ?key);
    });

    Ok(key)
}

/// A byte that follows the first byte of a key.
enum FollowUp {
    Byte(u8),
    /// Timed out, or the input closed.
    Missing,
    /// A termination signal arrived mid sequence; it wins over the partial key.
    Signal(KeyEvent),
}

fn read_follow_up(
    device: &mut impl InputDevice,
    escape_timeout: Duration,
) -> miette::Result<FollowUp> {
    Ok(match device.read_byte(Some(escape_timeout))? {
        ReadOutcome::Byte(byte) => FollowUp::Byte(byte),
        ReadOutcome::TimedOut | ReadOutcome::Eof => FollowUp::Missing,
        ReadOutcome::Interrupted(signal) => {
            FollowUp::Signal(KeyEvent::Interrupted(signal))
        }
    })
}

fn decode_escape_sequence(
    device: &mut impl InputDevice,
    escape_timeout: Duration,
) -> miette::Result<KeyEvent> {
    // `ESC ESC ...` is either a meta prefixed key (Alt+arrow on some terminals) or an
    // Escape press followed quickly by another key. The extra ESC bytes are dropped and
    // the rest is decoded as a single key, so a trailing `[ A` is never read as text.
    let mut follow_up = read_follow_up(device, escape_timeout)?;
    while let FollowUp::Byte(ESC) = follow_up {
        follow_up = read_follow_up(device, escape_timeout)?;
    }

    Ok(match follow_up {
        FollowUp::Missing => KeyEvent::Special(SpecialKey::Escape),
        FollowUp::Signal(key) => key,
        FollowUp::Byte(b'[') => decode_csi(device, escape_timeout)?,
        FollowUp::Byte(b'O') => match read_follow_up(device, escape_timeout)? {
            FollowUp::Byte(final_byte) => {
                arrow_from_final_byte(final_byte).unwrap_or(KeyEvent::Unidentified)
            }
            FollowUp::Missing => KeyEvent::Unidentified,
            FollowUp::Signal(key) => key,
        },
        FollowUp::Byte(_) => KeyEvent::Unidentified,
    })
}

/// `ESC [` has been read. Consumes parameter bytes (`0x30..=0x3F`) and intermediate
/// bytes (`0x20..=0x2F`) up to the final byte.
fn decode_csi(
    device: &mut impl InputDevice,
    escape_timeout: Duration,
) -> miette::Result<KeyEvent> {
    let mut has_params = false;
    for _ in 0..MAX_CSI_SEQUENCE_LEN {
        match read_follow_up(device, escape_timeout)? {
            FollowUp::Byte(byte @ 0x40..=0x7e) => {
                return Ok(if has_params {
                    KeyEvent::Unidentified
                } else {
                    arrow_from_final_byte(byte).unwrap_or(KeyEvent::Unidentified)
                });
            }
            FollowUp::Byte(0x20..=0x3f) => has_params = true,
            FollowUp::Byte(_) | FollowUp::Missing => return Ok(KeyEvent::Unidentified),
            FollowUp::Signal(key) => return Ok(key),
        }
    }
    Ok(KeyEvent::Unidentified)
}

fn arrow_from_final_byte(final_byte: u8) -> Option<KeyEvent> {
    let special_key = match final_byte {
        b'A' => SpecialKey::Up,
        b'B' => SpecialKey::Down,
        b'C' => SpecialKey::Right,
        b'D' => SpecialKey::Left,
        _ => return None,
    };
    Some(KeyEvent::Special(special_key))
}

/// Completes a multi byte UTF-8 character from its lead byte.
fn decode_utf8(
    device: &mut impl InputDevice,
    lead_byte: u8,
    escape_timeout: Duration,
) -> miette::Result<KeyEvent> {
    let total_len = match lead_byte {
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    };

    let mut bytes = [lead_byte, 0, 0, 0];
    for slot in bytes.iter_mut().take(total_len).skip(1) {
        match read_follow_up(device, escape_timeout)? {
            FollowUp::Byte(byte @ 0x80..=0xbf) => *slot = byte,
            FollowUp::Byte(_) | FollowUp::Missing => return Ok(KeyEvent::Unidentified),
            FollowUp::Signal(key) => return Ok(key),
        }
    }

    // Overlong encodings and surrogates pass the byte range checks above but are
    // rejected here.
    Ok(std::str::from_utf8(&bytes[..total_len])
        .ok()
        .and_then(|it| it.chars().next())
        .map_or(KeyEvent::Unidentified, KeyEvent::Char))
}
