//! Screen rendering
//!
//! Draws the main screen widgets and the menu onto any RGB565
//! [`DrawTarget`]. Every widget first blanks its own region, so widgets
//! can be redrawn independently.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_5X8, FONT_6X10, FONT_9X15};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;

use volctrl_core::datetime;
use volctrl_core::layout::{
    self, menu_marker, Widget, DATETIME_ORIGIN, LINK_CENTER, MENU_SPACING, MENU_TEXT_X, MENU_TITLE, MENU_TOP,
    MUTE_RADIUS, SPEAKER_ORIGIN, SPEAKER_RADIUS, SPEAKER_SPACING, VOLUME_CENTER,
};
use volctrl_core::menu::Menu;
use volctrl_core::speaker::SpeakerState;
use volctrl_core::view::PanelView;
use volctrl_core::Rect;

pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const FOREGROUND: Rgb565 = Rgb565::WHITE;
pub const HIGHLIGHT: Rgb565 = Rgb565::YELLOW;
/// Volume bar when the last read failed
pub const DIM: Rgb565 = Rgb565::new(8, 16, 8);

/// Half the length of each stroke of the mute cross
const MUTE_CROSS: i32 = 17;

/// Gap between the volume number and the warning mark
const WARNING_OFFSET: i32 = 50;

fn rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(
        Point::new(i32::from(rect.x), i32::from(rect.y)),
        Size::new(u32::from(rect.width), u32::from(rect.height)),
    )
}

fn point((x, y): (i32, i32)) -> Point {
    Point::new(x, y)
}

/// Text centered on `center`
fn centered<D>(
    target: &mut D,
    text: &str,
    center: Point,
    style: MonoTextStyle<'_, Rgb565>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(text, center, style, layout).draw(target)?;
    Ok(())
}

/// Redraw one widget of the main screen
pub fn draw_widget<D>(target: &mut D, widget: Widget, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.fill_solid(&rectangle(widget.region()), BACKGROUND)?;

    match widget {
        Widget::StandbyTime => standby_time(target, view),
        Widget::Link => link(target, view),
        Widget::Speakers => speakers(target, view),
        Widget::DateTime => date_time(target, view),
        Widget::StandbyIcon => standby_icon(target, view),
        Widget::Volume => volume(target, view),
        Widget::VolumeBar => volume_bar(target, view),
        Widget::Status => status(target, view),
    }
}

/// Draw the whole main screen
pub fn draw_main<D>(target: &mut D, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(BACKGROUND)?;
    for widget in Widget::ALL {
        draw_widget(target, widget, view)?;
    }
    Ok(())
}

fn standby_time<D>(target: &mut D, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(minutes) = view.standby_minutes else {
        return Ok(());
    };
    let mut text: String<8> = String::new();
    let _ = write!(text, "{}m", minutes);

    let region = layout::STANDBY_TIME;
    Text::with_baseline(
        &text,
        Point::new(i32::from(region.x), i32::from(region.y)),
        MonoTextStyle::new(&FONT_6X10, FOREGROUND),
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}

fn link<D>(target: &mut D, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = if view.link_up {
        PrimitiveStyle::with_fill(Rgb565::GREEN)
    } else {
        PrimitiveStyle::with_stroke(Rgb565::RED, 2)
    };
    Circle::with_center(point(LINK_CENTER), 23)
        .into_styled(style)
        .draw(target)
}

fn speakers<D>(target: &mut D, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let label = MonoTextStyle::new(&FONT_6X10, BACKGROUND);

    for (i, dot) in view.speakers.iter().enumerate() {
        let center = point(SPEAKER_ORIGIN) + Point::new(i as i32 * SPEAKER_SPACING, 0);
        let color = match dot.state {
            SpeakerState::Active => Rgb565::GREEN,
            SpeakerState::Standby => Rgb565::BLUE,
            SpeakerState::Down => Rgb565::RED,
        };
        Circle::with_center(center, SPEAKER_RADIUS * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(target)?;
        if dot.muted {
            centered(target, "M", center, label)?;
        }
    }
    Ok(())
}

fn date_time<D>(target: &mut D, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_baseline(
        &datetime::label(view.datetime),
        point(DATETIME_ORIGIN),
        MonoTextStyle::new(&FONT_5X8, FOREGROUND),
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}

fn standby_icon<D>(target: &mut D, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if !view.standby {
        return Ok(());
    }
    let region = layout::STANDBY_ICON;
    let center = Point::new(
        i32::from(region.x + region.width / 2),
        i32::from(region.y + region.height / 2),
    );
    centered(
        target,
        "Zzz",
        center,
        MonoTextStyle::new(&FONT_10X20, Rgb565::CYAN),
    )
}

fn volume<D>(target: &mut D, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let center = point(VOLUME_CENTER);

    if view.muted {
        let stroke = PrimitiveStyle::with_stroke(Rgb565::RED, 3);
        Circle::with_center(center, MUTE_RADIUS * 2 + 1)
            .into_styled(stroke)
            .draw(target)?;
        Line::new(
            center + Point::new(-MUTE_CROSS, -MUTE_CROSS),
            center + Point::new(MUTE_CROSS, MUTE_CROSS),
        )
        .into_styled(stroke)
        .draw(target)?;
        return Line::new(
            center + Point::new(MUTE_CROSS, -MUTE_CROSS),
            center + Point::new(-MUTE_CROSS, MUTE_CROSS),
        )
        .into_styled(stroke)
        .draw(target);
    }

    let mut text: String<4> = String::new();
    match view.volume {
        Some(v) => {
            let _ = write!(text, "{}", v);
        }
        None => {
            let _ = text.push_str("--");
        }
    }
    let style = MonoTextStyle::new(&FONT_10X20, FOREGROUND);
    centered(target, &text, center, style)?;

    if !view.volume_ok {
        let mark = MonoTextStyle::new(&FONT_10X20, Rgb565::RED);
        centered(target, "!", center + Point::new(WARNING_OFFSET, 0), mark)?;
    }
    Ok(())
}

fn volume_bar<D>(target: &mut D, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let region = layout::VOLUME_BAR;
    let fill = view.bar_fill(region.width);
    if fill == 0 {
        return Ok(());
    }
    let color = if view.volume_ok { HIGHLIGHT } else { DIM };
    target.fill_solid(
        &rectangle(Rect::new(region.x, region.y, fill, region.height)),
        color,
    )
}

fn status<D>(target: &mut D, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let region = layout::STATUS;
    let center = Point::new(
        i32::from(region.x + region.width / 2),
        i32::from(region.y + region.height / 2),
    );
    centered(
        target,
        view.status.text(),
        center,
        MonoTextStyle::new(&FONT_9X15, FOREGROUND),
    )
}

/// Draw the menu at its current level
pub fn draw_menu<D>(target: &mut D, menu: &Menu) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(BACKGROUND)?;

    let level = menu.level();
    Text::with_baseline(
        level.title(),
        point(MENU_TITLE),
        MonoTextStyle::new(&FONT_10X20, HIGHLIGHT),
        Baseline::Top,
    )
    .draw(target)?;

    let style = MonoTextStyle::new(&FONT_9X15, FOREGROUND);
    for (i, item) in level.items().iter().enumerate() {
        let y = MENU_TOP + i as u16 * MENU_SPACING;
        Text::with_baseline(item, Point::new(MENU_TEXT_X, i32::from(y)), style, Baseline::Top)
            .draw(target)?;
    }

    draw_marker(target, menu.position(), true)
}

/// Show or hide the highlight square beside a menu item
pub fn draw_marker<D>(target: &mut D, position: u8, visible: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let color = if visible { HIGHLIGHT } else { BACKGROUND };
    target.fill_solid(&rectangle(menu_marker(position)), color)
}
