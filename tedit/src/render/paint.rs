// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::{cursor::{Hide, MoveTo, Show},
                style::Print,
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;

use crate::{LockedOutputDevice, OutputDevice, RenderOp, RenderOps,
            lock_output_device_as_mut};

/// Queues crossterm commands onto a [`LockedOutputDevice`]. A failed command is logged
/// and returned from the enclosing function as a [`miette::Report`].
#[macro_export]
macro_rules! queue_terminal_command {
    ($writer: expr, $arg_log_msg: expr $(, $command: expr)* $(,)?) => {{
        use ::crossterm::QueueableCommand;
        $(
            if let Err(err) = QueueableCommand::queue(&mut *$writer, $command) {
                ::tracing::error!(
                    message = "crossterm: ❌ Failed",
                    op = $arg_log_msg,
                    error = %err
                );
                return Err(::miette::miette!("{}: {err}", $arg_log_msg));
            }
        )*
    }};
}

/// Executes every op of the frame in order, then flushes once, so the terminal never
/// shows a half painted frame.
///
/// # Errors
///
/// Returns an error if writing to the output device fails.
pub fn paint(render_ops: &RenderOps, output_device: &OutputDevice) -> miette::Result<()> {
    let locked_output_device: LockedOutputDevice<'_> =
        lock_output_device_as_mut!(output_device);
    for render_op in render_ops.iter() {
        paint_render_op(render_op, locked_output_device)?;
    }
    locked_output_device.flush().into_diagnostic()
}

fn paint_render_op(
    render_op: &RenderOp,
    locked_output_device: LockedOutputDevice<'_>,
) -> miette::Result<()> {
    match render_op {
        RenderOp::HideCursor => {
            queue_terminal_command!(locked_output_device, "HideCursor", Hide);
        }
        RenderOp::ShowCursor => {
            queue_terminal_command!(locked_output_device, "ShowCursor", Show);
        }
        RenderOp::MoveCursorPositionAbs(pos) => {
            let row = u16::try_from(pos.row_index).unwrap_or(u16::MAX);
            let col = u16::try_from(pos.col_index).unwrap_or(u16::MAX);
            queue_terminal_command!(
                locked_output_device,
                "MoveCursorPositionAbs",
                MoveTo(col, row)
            );
        }
        RenderOp::ClearCurrentLine => {
            queue_terminal_command!(
                locked_output_device,
                "ClearCurrentLine",
                Clear(ClearType::CurrentLine)
            );
        }
        RenderOp::PaintText(text) => {
            queue_terminal_command!(locked_output_device, "PaintText", Print(text));
        }
    }
    Ok(())
}
