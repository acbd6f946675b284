use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use plume_core::{Font, Image, Rgb, Side};
use plume_style::{
    Alignment, BackgroundGradient, BackgroundPainter, BackgroundType, Border, Origin, Overrides,
    Style, StyleProperty, StyleSink, TextDecoration, Unit, listener,
};

#[derive(Debug)]
struct Flat;

impl BackgroundPainter for Flat {
    fn paint(&self, _canvas: &mut dyn Any, _x: i32, _y: i32, _width: i32, _height: i32) {}
}

fn dark_theme() -> Style {
    Style::builder()
        .fg_color(Rgb(0x00FF00))
        .bg_color(Rgb(0x101010))
        .font(Font::new("Mono", 12))
        .bg_image(Image::new("noise", 16, 16))
        .bg_transparency(0x40)
        .opacity(0xC0)
        .elevation(4)
        .icon_gap(2.0, Unit::Dips)
        .surface(true)
        .background_type(BackgroundType::GradientRadial)
        .background_gradient(BackgroundGradient::new(Rgb(0x000080), Rgb(0x000000)))
        .border(Border::line(Rgb(0x404040), 1.0))
        .alignment(Alignment::Right)
        .text_decoration(TextDecoration::UNDERLINE)
        .padding(6.0, 6.0, 12.0, 12.0)
        .padding_units(&[Unit::Dips])
        .margin(1.0, 1.0, 1.0, 1.0)
        .build()
        .unwrap()
}

#[test]
fn merge_preserves_user_overrides() {
    let mut style = Style::new();
    style.set_fg_color(Rgb(0xFF0000));

    let theme = dark_theme();
    style.merge(&theme);

    assert_eq!(style.fg_color(), Rgb(0xFF0000));
    assert!(style.is_modified());
    assert_eq!(style.overrides(), Overrides::FG_COLOR);

    // Everything never set directly now comes from the theme.
    assert_eq!(style.bg_color(), theme.bg_color());
    assert_eq!(style.font(), theme.font());
    assert_eq!(style.bg_image(), theme.bg_image());
    assert_eq!(style.raw_bg_transparency(), 0x40);
    assert_eq!(style.opacity(), 0xC0);
    assert_eq!(style.elevation(), 4);
    assert_eq!(style.icon_gap_value(), 2.0);
    assert_eq!(style.icon_gap_unit(), Unit::Dips);
    assert!(style.is_surface());
    assert_eq!(style.background_type(), BackgroundType::GradientRadial);
    assert_eq!(style.background_gradient(), theme.background_gradient());
    assert_eq!(style.border(), theme.border());
    assert_eq!(style.alignment(), Alignment::Right);
    assert_eq!(style.text_decoration(), TextDecoration::UNDERLINE);
    assert_eq!(style.padding_box(), theme.padding_box());
    assert_eq!(style.margin_box(), theme.margin_box());
}

#[test]
fn unmodified_style_becomes_equal_to_theme() {
    let mut style = Style::new();
    let theme = dark_theme();
    style.merge(&theme);
    assert_eq!(style, theme);
    assert!(!style.is_modified());
}

#[test]
fn padding_moves_as_a_whole() {
    let mut style = Style::new();
    style.set_padding_side(Side::Top, 30.0).unwrap();
    style.merge(&dark_theme());

    // The user touched one side; the whole box, units included, is kept.
    assert_eq!(style.padding_value(false, Side::Top), 30.0);
    assert_eq!(style.padding_value(false, Side::Left), 3.0);
    assert_eq!(style.padding_units(), None);
}

#[test]
fn theme_units_come_with_theme_values() {
    let mut style = Style::new();
    style.merge(&dark_theme());
    assert_eq!(style.padding_units(), Some([Unit::Dips; 4]));
    assert_eq!(style.padding_value(false, Side::Right), 12.0);
}

#[test]
fn repeated_merges_behave_identically() {
    let mut style = Style::new();
    style.set_alignment(Alignment::Center);
    style.set_margin(0.0, 0.0, 0.0, 0.0).unwrap();
    let before = style.overrides();

    style.merge(&dark_theme());
    assert_eq!(style.overrides(), before);

    let light = Style::builder()
        .fg_color(Rgb(0x111111))
        .alignment(Alignment::Left)
        .build()
        .unwrap();
    style.merge(&light);
    assert_eq!(style.overrides(), before);
    assert_eq!(style.fg_color(), Rgb(0x111111));
    assert_eq!(style.alignment(), Alignment::Center);
    assert_eq!(style.margin_value(false, Side::Bottom), 0.0);
}

#[test]
fn theme_origin_writes_stay_mergeable() {
    let mut style = Style::new();
    style.set_bg_color_with(Rgb(0xDEAD00), Origin::Theme);
    style.merge(&dark_theme());
    assert_eq!(style.bg_color(), Rgb(0x101010));
}

#[test]
fn merge_takes_painted_transparency() {
    let theme = Style::builder()
        .bg_transparency(0)
        .bg_image(Image::new("wall", 16, 16).with_opaque(true))
        .background_type(BackgroundType::ImageScaled)
        .build()
        .unwrap();
    assert_eq!(theme.bg_transparency(), 0xFF);
    assert_eq!(theme.raw_bg_transparency(), 0);

    let mut style = Style::new();
    style.set_bg_transparency(0x40).unwrap();
    style.reset_overrides();
    style.merge(&theme);
    assert_eq!(style, theme);

    style.set_bg_image(None);
    assert_eq!(style.bg_transparency(), 0xFF);
}

#[test]
fn reset_overrides_lets_theme_win() {
    let mut style = Style::new();
    style.set_fg_color(Rgb(0xFF0000));
    style.reset_overrides();
    style.merge(&dark_theme());
    assert_eq!(style.fg_color(), Rgb(0x00FF00));
}

#[test]
fn painter_is_always_adopted() {
    let mut style = Style::new();
    let own: Rc<dyn BackgroundPainter> = Rc::new(Flat);
    style.set_bg_painter(Some(own));
    assert!(style.overrides().is_empty());

    let themed: Rc<dyn BackgroundPainter> = Rc::new(Flat);
    let theme = Style::builder().bg_painter(Rc::clone(&themed)).build().unwrap();
    style.merge(&theme);
    let adopted = style.bg_painter().unwrap();
    assert!(Rc::ptr_eq(adopted, &themed));

    style.merge(&Style::new());
    assert!(style.bg_painter().is_none());
}

#[test]
fn merge_notifies_for_each_pulled_group() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let mut style = Style::new();
    style.set_bg_color(Rgb(0xFFFF00));
    style.add_listener(listener(move |p, _| sink.borrow_mut().push(p)));

    let theme = Style::builder()
        .fg_color(Rgb(0x00FF00))
        .bg_color(Rgb(0x0000FF))
        .elevation(1)
        .build()
        .unwrap();
    style.merge(&theme);

    assert_eq!(
        *events.borrow(),
        vec![StyleProperty::FgColor, StyleProperty::Elevation]
    );
}
