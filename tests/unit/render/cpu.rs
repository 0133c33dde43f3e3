use super::*;

#[test]
fn resize_allocates_device_pixel_buffer() {
    let mut ctx = CpuContext::new();
    ctx.resize(20, 10, 2.0);
    assert_eq!(ctx.width(), 20);
    assert_eq!(ctx.height(), 10);
    assert_eq!(ctx.pixels().len(), 20 * 10 * 4);
    assert_eq!(ctx.scale(), 2.0);

    // Resizing resets paint state.
    ctx.set_global_alpha(0.25);
    ctx.resize(4, 4, 1.0);
    assert_eq!(ctx.global_alpha(), 1.0);
}

#[test]
fn scale_transform_maps_drawing_coordinates() {
    let mut ctx = CpuContext::new();
    ctx.resize(20, 20, 2.0);
    ctx.set_fill(Rgba8::rgb(255, 0, 0));
    ctx.fill_rect(Rect::new(1.0, 1.0, 3.0, 2.0));

    // Device box is (2,2)..(6,4).
    assert_eq!(ctx.pixel(2, 2), [255, 0, 0, 255]);
    assert_eq!(ctx.pixel(5, 3), [255, 0, 0, 255]);
    assert_eq!(ctx.pixel(1, 2), [0, 0, 0, 0]);
    assert_eq!(ctx.pixel(6, 3), [0, 0, 0, 0]);
    assert_eq!(ctx.pixel(2, 4), [0, 0, 0, 0]);
}

#[test]
fn clear_zeroes_the_buffer() {
    let mut ctx = CpuContext::new();
    ctx.resize(4, 4, 1.0);
    ctx.set_fill(Rgba8::rgb(10, 20, 30));
    ctx.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
    assert_ne!(ctx.pixel(1, 1), [0, 0, 0, 0]);

    ctx.clear();
    assert!(ctx.pixels().iter().all(|&b| b == 0));
}

#[test]
fn save_restore_round_trips_paint_state() {
    let mut ctx = CpuContext::new();
    ctx.resize(2, 2, 1.0);
    ctx.set_global_alpha(0.5);
    ctx.save();
    ctx.set_global_alpha(0.1);
    ctx.set_blend_mode(BlendMode::Additive);
    ctx.restore();
    assert_eq!(ctx.global_alpha(), 0.5);

    // Restoring past the bottom of the stack leaves state untouched.
    ctx.restore();
    assert_eq!(ctx.global_alpha(), 0.5);
}

#[test]
fn global_alpha_scales_fill() {
    let mut ctx = CpuContext::new();
    ctx.resize(2, 1, 1.0);
    ctx.set_fill(Rgba8::rgb(255, 255, 255));
    ctx.set_global_alpha(0.5);
    ctx.fill_rect(Rect::new(0.0, 0.0, 2.0, 1.0));

    let px = ctx.pixel(0, 0);
    assert_eq!(px[3], 128);
    // Premultiplied: channels carry the alpha.
    assert_eq!(px[0], 128);
}

#[test]
fn normal_blend_is_source_over() {
    let mut ctx = CpuContext::new();
    ctx.resize(1, 1, 1.0);
    ctx.set_fill(Rgba8::rgb(0, 0, 255));
    ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));

    // Opaque red fully replaces.
    ctx.set_fill(Rgba8::rgb(255, 0, 0));
    ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(ctx.pixel(0, 0), [255, 0, 0, 255]);

    // Half-alpha white over opaque red keeps full alpha and mixes color.
    ctx.set_global_alpha(0.5);
    ctx.set_fill(Rgba8::rgb(255, 255, 255));
    ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
    let px = ctx.pixel(0, 0);
    assert_eq!(px[3], 255);
    assert!(px[0] > 180); // red stays strong
    assert!(px[1] > 100); // white shows through
}

#[test]
fn additive_blend_saturates() {
    let mut ctx = CpuContext::new();
    ctx.resize(1, 1, 1.0);
    ctx.set_blend_mode(BlendMode::Additive);
    ctx.set_fill(Rgba8::rgb(200, 10, 0));
    ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
    ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));

    let px = ctx.pixel(0, 0);
    assert_eq!(px[0], 255); // 200 + 200 saturates
    assert_eq!(px[1], 20);
    assert_eq!(px[3], 255);
}

#[test]
fn out_of_bounds_and_degenerate_rects_are_noops() {
    let mut ctx = CpuContext::new();
    ctx.resize(4, 4, 1.0);
    ctx.set_fill(Rgba8::rgb(255, 255, 255));

    ctx.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0));
    ctx.fill_rect(Rect::new(-5.0, -5.0, -1.0, -1.0));
    ctx.fill_rect(Rect::new(2.0, 2.0, 2.0, 2.0));
    ctx.fill_rect(Rect::new(3.0, 3.0, 1.0, 1.0)); // inverted
    assert!(ctx.pixels().iter().all(|&b| b == 0));

    // Partially out of bounds clips instead of panicking.
    ctx.fill_rect(Rect::new(-2.0, -2.0, 2.0, 2.0));
    assert_eq!(ctx.pixel(0, 0), [255, 255, 255, 255]);
    assert_eq!(ctx.pixel(1, 1), [255, 255, 255, 255]);
    assert_eq!(ctx.pixel(2, 2), [0, 0, 0, 0]);
}

#[test]
fn zero_sized_context_ignores_draws() {
    let mut ctx = CpuContext::new();
    ctx.set_fill(Rgba8::rgb(255, 255, 255));
    ctx.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(ctx.pixels().is_empty());
}

#[test]
fn to_image_unpremultiplies() {
    let mut ctx = CpuContext::new();
    ctx.resize(2, 1, 1.0);
    ctx.set_fill(Rgba8::rgb(255, 0, 0));
    ctx.set_global_alpha(0.5);
    ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));

    let img = ctx.to_image();
    assert_eq!(img.dimensions(), (2, 1));
    let px = img.get_pixel(0, 0).0;
    assert_eq!(px[3], 128);
    assert!(px[0] >= 254); // straight alpha recovers full red
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
}
