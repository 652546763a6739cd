//! The four lessons

use super::{write_tag, DemoConfig, DemoError, Tag};
use crate::{BinaryTree, Cursor, CursorSlot, PosInts};
use colored::Color;
use std::io::Write;

fn presence<T>(config: &DemoConfig, slot: &Option<T>) -> String {
    match slot {
        Some(_) => config.paint("present", Color::BrightGreen),
        None => config.paint("absent", Color::BrightRed),
    }
}

pub(super) fn lifecycle<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    let mut slot: Option<Cursor<'_, u8>> = None;
    let new = config.paint("Cursor::new", Color::BrightCyan);

    writeln!(out, "A cursor is created empty by its constructor:")?;
    writeln!(out)?;
    writeln!(out, "  slot before `{new}`: {}", presence(config, &slot))?;
    slot = Some(Cursor::new());
    writeln!(out, "  slot after `{new}`: {}", presence(config, &slot))?;
    writeln!(
        out,
        "  fresh cursor: done={}, index={}, peek={:?}",
        slot.is_done(),
        slot.index(),
        slot.peek()
    )?;
    writeln!(out)?;

    writeln!(out, "The cursor owns a buffer of element references, so a new")?;
    writeln!(out, "session can be loaded without creating another cursor.")?;
    writeln!(out)?;

    if let Some(cursor) = slot.take() {
        cursor.destroy();
    }
    writeln!(
        out,
        "`{}` consumes the cursor together with its buffer; the slot is now {}.",
        config.paint("Cursor::destroy", Color::BrightCyan),
        presence(config, &slot)
    )?;
    writeln!(out)?;

    write_tag(
        out,
        config,
        Tag::Note,
        "`advance_or_destroy` retires the cursor on its own once the\nsession ends; part 3 shows it in a loop.",
    )
}

pub(super) fn populate<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    writeln!(out, "There are two ways to load data into a cursor.")?;
    writeln!(out)?;

    writeln!(
        out,
        "{}. `{}` replaces the session of an existing cursor:",
        config.paint("1", Color::BrightCyan),
        config.paint("Cursor::set_from", Color::BrightCyan)
    )?;
    write!(out, "\n   > ")?;
    let mut cursor = Cursor::new();
    cursor.set_from("data")?;
    write_chars(config, out, &mut cursor)?;
    cursor.destroy();
    writeln!(out)?;
    writeln!(out)?;

    writeln!(
        out,
        "{}. `{}` builds a new cursor straight from a source:",
        config.paint("2", Color::BrightCyan),
        config.paint("Cursor::from_source", Color::BrightCyan)
    )?;
    write!(out, "\n   > ")?;
    let mut cursor = Cursor::from_source("other data")?;
    write_chars(config, out, &mut cursor)?;
    cursor.destroy();
    writeln!(out)?;
    writeln!(out)?;

    writeln!(
        out,
        "Allocating a new cursor for every session is {}; reusing one",
        config.paint("wasteful", Color::BrightRed)
    )?;
    writeln!(
        out,
        "with `set_from` only replaces its buffer of references."
    )?;
    Ok(())
}

fn write_chars<W: Write>(
    config: &DemoConfig,
    out: &mut W,
    cursor: &mut Cursor<'_, str>,
) -> Result<(), DemoError> {
    while let Some(ch) = cursor.peek() {
        write!(out, "[ {} ]", config.paint(ch, Color::BrightGreen))?;
        cursor.advance_keep();
    }
    Ok(())
}

fn write_ints<W: Write>(out: &mut W, cursor: &Cursor<'_, i32>) -> Result<(), DemoError> {
    if let Some(value) = cursor.peek() {
        write!(out, "{value} ")?;
    }
    Ok(())
}

pub(super) fn movement<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    let ints = config.paint("ints", Color::BrightYellow);
    writeln!(out, "Every advance picks what happens when the session ends:")?;
    writeln!(out)?;

    // Keep: buffer survives, reset replays
    let primes = [2, 3, 5, 7, -1];
    let mut cursor = Cursor::from_source(PosInts::new(&primes))?;
    writeln!(
        out,
        "{}: walk to the end and keep the buffer:",
        config.paint("> EndPolicy::Keep", Color::BrightGreen)
    )?;
    write!(out, "    {ints} -> ")?;
    while !cursor.is_done() {
        write_ints(out, &cursor)?;
        cursor.advance_keep();
    }
    writeln!(out)?;
    writeln!(out)?;
    writeln!(
        out,
        "  The buffer is still held, so `{}` replays the session:",
        config.paint("reset", Color::BrightCyan)
    )?;
    write!(out, "    {} -> ", config.paint("same ints", Color::BrightYellow))?;
    cursor.reset();
    while !cursor.is_done() {
        write_ints(out, &cursor)?;
        cursor.advance_keep();
    }
    cursor.clear();
    writeln!(out)?;
    writeln!(out)?;

    // Consume: buffer released, cursor reusable
    let more = [11, 13, 17, -1];
    cursor.set_from(PosInts::new(&more))?;
    writeln!(
        out,
        "{}: walk to the end and release the buffer; the cursor",
        config.paint("> EndPolicy::Consume", Color::BrightGreen)
    )?;
    writeln!(out, "  stays usable for the next session:")?;
    write!(out, "    {ints} -> ")?;
    while !cursor.is_done() {
        write_ints(out, &cursor)?;
        cursor.advance_consume();
    }
    writeln!(out)?;
    writeln!(out)?;
    let buffer_state = if cursor.has_buffer() {
        config.paint("still held", Color::BrightRed)
    } else {
        config.paint("released", Color::BrightCyan)
    };
    writeln!(out, "  Now the buffer is {buffer_state} and the cursor is still usable.")?;
    writeln!(out)?;

    // DestroySelf: the slot empties itself
    let last = [19, 23, 29, -1];
    cursor.set_from(PosInts::new(&last))?;
    writeln!(
        out,
        "{}: drop the cursor at the end, so the slot itself",
        config.paint("> EndPolicy::DestroySelf", Color::BrightGreen)
    )?;
    writeln!(out, "  works as the loop condition:")?;
    write!(out, "    {ints} -> ")?;
    let mut slot = Some(cursor);
    while let Some(cursor) = slot {
        write_ints(out, &cursor)?;
        slot = cursor.advance_or_destroy();
    }
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "  And now the cursor slot is {}.", presence(config, &slot))?;
    Ok(())
}

pub(super) fn getters<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    let mut tree = BinaryTree::new(f32::total_cmp, |_: f32| {});
    tree.extend(config.floats.iter().copied());
    let mut cursor = tree.to_cursor()?;

    writeln!(out, "Driving a cursor through its methods keeps every state")?;
    writeln!(out, "transition checked. Here a tree of floats is flattened")?;
    writeln!(out, "into a cursor and read back in order:")?;
    writeln!(out)?;
    while !cursor.is_done() {
        if let Some(value) = cursor.peek() {
            writeln!(
                out,
                "  [{}: {:.3}]",
                config.paint(cursor.index(), Color::BrightGreen),
                value
            )?;
        }
        cursor.advance_consume();
    }
    writeln!(out)?;
    writeln!(
        out,
        "`{}` returns the position of the current element and `{}`",
        config.paint("index", Color::BrightCyan),
        config.paint("peek", Color::BrightCyan)
    )?;
    writeln!(out, "returns a reference to it.")?;
    writeln!(out)?;
    write_tag(
        out,
        config,
        Tag::Note,
        "`peek` returns `None` once the session has ended; always\nmatch on it instead of assuming an element.",
    )?;

    drop(cursor);
    tree.destroy();
    Ok(())
}
