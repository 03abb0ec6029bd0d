use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use shared::geometry::{build_segments, label_font_px, truncate_label, tween, WheelSegment};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 450;
const LABEL_MAX_CHARS: usize = 14;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub entries: Vec<String>,
    pub rotation: f64,
    pub is_spinning: bool,
    pub duration_ms: u32,
    pub pointer_angle_deg: f64,
    pub winner_index: Option<usize>,
}

#[derive(Default)]
struct Scene {
    entries: Vec<String>,
    segments: Vec<WheelSegment>,
    pointer_angle_deg: f64,
    winner_index: Option<usize>,
    is_spinning: bool,
}

struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

struct Animation {
    canvas_ref: NodeRef,
    scene: Rc<RefCell<Scene>>,
    displayed: Rc<RefCell<f64>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    tween: RefCell<Tween>,
}

fn request_frame(animation: Rc<Animation>) {
    let next = animation.clone();
    let handle = request_animation_frame(move |timestamp| {
        let (angle, done) = {
            let mut state = next.tween.borrow_mut();
            let started_at = *state.started_at.get_or_insert(timestamp);
            let progress = if state.duration_ms <= 0.0 {
                1.0
            } else {
                ((timestamp - started_at) / state.duration_ms).min(1.0)
            };
            (tween(state.from, state.to, progress), progress >= 1.0)
        };

        *next.displayed.borrow_mut() = angle;
        draw(&next.canvas_ref, &next.scene.borrow(), angle);

        if done {
            next.frame.borrow_mut().take();
        } else {
            request_frame(next.clone());
        }
    });
    *animation.frame.borrow_mut() = Some(handle);
}

fn context_for(canvas_ref: &NodeRef) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, context))
}

// Canvas angles start at 3 o'clock; wheel angles start at 12.
fn to_canvas_radians(wheel_deg: f64) -> f64 {
    (wheel_deg - 90.0) * PI / 180.0
}

fn draw(canvas_ref: &NodeRef, scene: &Scene, rotation: f64) {
    let Some((canvas, context)) = context_for(canvas_ref) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;

    context.clear_rect(0.0, 0.0, width, height);

    // Outer glow
    context.begin_path();
    let glow_intensity = if scene.is_spinning { 0.25 } else { 0.15 };
    context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
    let _ = context.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    // Segments
    for segment in &scene.segments {
        let start = to_canvas_radians(segment.start_deg + rotation);
        let end = to_canvas_radians(segment.end_deg + rotation);
        context.begin_path();
        context.set_fill_style_str(&segment.fill.css());
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.close_path();
        context.fill();
    }

    // Dividers, only meaningful with two or more segments
    if scene.segments.len() > 1 {
        context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
        context.set_line_width(2.0);
        for segment in &scene.segments {
            let angle = to_canvas_radians(segment.start_deg + rotation);
            context.begin_path();
            context.move_to(center_x, center_y);
            context.line_to(center_x + radius * angle.cos(), center_y + radius * angle.sin());
            context.stroke();
        }
    }

    // Winner outline once the wheel has stopped
    if let Some(winner) = scene.winner_index.filter(|_| !scene.is_spinning) {
        if let Some(segment) = scene.segments.get(winner) {
            context.begin_path();
            context.set_stroke_style_str("#ffd700");
            context.set_line_width(6.0);
            context.move_to(center_x, center_y);
            let _ = context.arc(
                center_x,
                center_y,
                radius - 3.0,
                to_canvas_radians(segment.start_deg + rotation),
                to_canvas_radians(segment.end_deg + rotation),
            );
            context.close_path();
            context.stroke();
        }
    }

    // Labels
    if !scene.entries.is_empty() {
        let font = format!(
            "bold {}px 'Segoe UI', Roboto, system-ui, sans-serif",
            label_font_px(scene.entries.len())
        );
        context.set_font(&font);
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_fill_style_str("#ffffff");
        context.set_shadow_color("rgba(0, 0, 0, 0.5)");
        context.set_shadow_blur(3.0);

        for (segment, entry) in scene.segments.iter().zip(&scene.entries) {
            context.save();
            let _ = context.translate(center_x, center_y);
            let _ = context.rotate(to_canvas_radians(segment.mid_deg() + rotation));
            let _ = context.translate(radius * 0.6, 0.0);
            let _ = context.fill_text(&truncate_label(entry, LABEL_MAX_CHARS), 0.0, 0.0);
            context.restore();
        }

        context.set_shadow_color("rgba(0, 0, 0, 0)");
        context.set_shadow_blur(0.0);
    }

    // Hub
    let inner_radius = radius * 0.18;
    context.begin_path();
    context.set_fill_style_str("#1e293b");
    let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
    context.fill();
    context.set_fill_style_str("#ffffff");
    context.set_font("bold 16px 'Segoe UI', Roboto, system-ui, sans-serif");
    let _ = context.fill_text("Spin", center_x, center_y);

    // Outer ring
    context.begin_path();
    context.set_stroke_style_str("rgba(130, 100, 255, 0.5)");
    context.set_line_width(4.0);
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    draw_pointer(&context, center_x, center_y, radius, scene);
}

fn draw_pointer(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64, radius: f64, scene: &Scene) {
    let pointer_width = 20.0;
    let pointer_height = 30.0;
    let corner = 5.0;

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(scene.pointer_angle_deg * PI / 180.0);

    context.set_shadow_color(if scene.is_spinning {
        "rgba(255, 215, 130, 0.8)"
    } else {
        "rgba(255, 215, 0, 0.6)"
    });
    context.set_shadow_blur(if scene.is_spinning { 10.0 } else { 4.0 });

    // Rounded triangle with its tip just inside the rim
    let top = -radius - pointer_height;
    context.begin_path();
    context.move_to(0.0, -radius + 5.0);
    context.line_to(-pointer_width + corner, top + corner);
    context.quadratic_curve_to(-pointer_width, top + corner, -pointer_width, top);
    context.line_to(pointer_width - corner, top);
    context.quadratic_curve_to(pointer_width, top, pointer_width, top + corner);
    context.close_path();
    context.set_fill_style_str(if scene.is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();

    context.restore();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let scene = use_mut_ref(Scene::default);
    let displayed = use_mut_ref(|| props.rotation);
    let target = use_mut_ref(|| props.rotation);
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    {
        let canvas_ref = canvas_ref.clone();
        let scene = scene.clone();
        let displayed = displayed.clone();
        let target = target.clone();
        let frame = frame.clone();
        let duration_ms = props.duration_ms;

        use_effect_with(
            (
                props.entries.clone(),
                props.rotation,
                props.is_spinning,
                props.pointer_angle_deg,
                props.winner_index,
            ),
            move |(entries, rotation, is_spinning, pointer_angle_deg, winner_index)| {
                *scene.borrow_mut() = Scene {
                    entries: entries.clone(),
                    segments: build_segments(entries.len()),
                    pointer_angle_deg: *pointer_angle_deg,
                    winner_index: *winner_index,
                    is_spinning: *is_spinning,
                };

                let retarget = *target.borrow() != *rotation;
                if retarget {
                    *target.borrow_mut() = *rotation;
                    let from = *displayed.borrow();
                    request_frame(Rc::new(Animation {
                        canvas_ref,
                        scene,
                        displayed,
                        frame,
                        tween: RefCell::new(Tween {
                            from,
                            to: *rotation,
                            duration_ms: f64::from(duration_ms),
                            started_at: None,
                        }),
                    }));
                } else if frame.borrow().is_none() {
                    draw(&canvas_ref, &scene.borrow(), *displayed.borrow());
                }
                || ()
            },
        );
    }

    {
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
            }
        });
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
