use shared::geometry::{
    build_segments, fit_label_chars, label_arc, label_font_px, truncate_label, wedge_path,
};
use yew::prelude::*;

const VIEW_SIZE: f64 = 400.0;
const WHEEL_RADIUS: f64 = 180.0;
const LABEL_RADIUS: f64 = 128.0;
const HUB_RADIUS: f64 = 34.0;

#[derive(Properties, PartialEq)]
pub struct CurvedWheelProps {
    pub entries: Vec<String>,
    pub rotation: f64,
    pub is_spinning: bool,
    pub duration_ms: u32,
    pub pointer_angle_deg: f64,
    pub winner_index: Option<usize>,
}

/// SVG wheel whose labels follow each segment's arc. The rotation is
/// animated by a CSS transition on the wrapper.
#[function_component(CurvedWheel)]
pub fn curved_wheel(props: &CurvedWheelProps) -> Html {
    let center = VIEW_SIZE / 2.0;
    let segments = build_segments(props.entries.len());
    let font_px = label_font_px(props.entries.len());
    let highlight = props.winner_index.filter(|_| !props.is_spinning);

    let wheel_style = format!(
        "transform: rotate({}deg); transition: transform {}ms cubic-bezier(0.17, 0.67, 0.12, 0.99);",
        props.rotation, props.duration_ms
    );
    let pointer_style = format!("transform: rotate({}deg);", props.pointer_angle_deg);

    let arcs = segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.entry_index.is_some())
        .map(|(index, segment)| {
            let arc = label_arc(segment, center, center, LABEL_RADIUS);
            html! { <path id={format!("wheel-label-arc-{}", index)} d={arc.path} fill="none" /> }
        });

    let wedges = segments.iter().map(|segment| {
        let is_winner = segment.entry_index.is_some() && segment.entry_index == highlight;
        html! {
            <path
                d={wedge_path(segment, center, center, WHEEL_RADIUS)}
                fill={segment.fill.css()}
                stroke={if is_winner { "#ffd700" } else { "rgba(255, 255, 255, 0.8)" }}
                stroke-width={if is_winner { "5" } else { "2" }}
            />
        }
    });

    let labels = segments.iter().zip(&props.entries).enumerate().map(|(index, (segment, entry))| {
        let max_chars = fit_label_chars(segment.span_deg(), LABEL_RADIUS, font_px);
        html! {
            <text
                fill="#ffffff"
                font-size={font_px.to_string()}
                font-weight="bold"
                font-family="'Segoe UI', Roboto, system-ui, sans-serif"
            >
                <textPath
                    href={format!("#wheel-label-arc-{}", index)}
                    startOffset="50%"
                    text-anchor="middle"
                >
                    {truncate_label(entry, max_chars)}
                </textPath>
            </text>
        }
    });

    html! {
        <div class="relative w-full max-w-[450px] aspect-square">
            <div class="absolute inset-0" style={wheel_style}>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox={format!("0 0 {} {}", VIEW_SIZE, VIEW_SIZE)}
                    class="w-full h-full drop-shadow-lg"
                >
                    <defs>{ for arcs }</defs>
                    <circle cx={center.to_string()} cy={center.to_string()} r={(WHEEL_RADIUS + 8.0).to_string()} fill="rgba(100, 130, 255, 0.15)" />
                    { for wedges }
                    { for labels }
                    <circle cx={center.to_string()} cy={center.to_string()} r={HUB_RADIUS.to_string()} fill="#1e293b" />
                    <text
                        x={center.to_string()}
                        y={center.to_string()}
                        fill="#ffffff"
                        font-size="16"
                        font-weight="bold"
                        text-anchor="middle"
                        dominant-baseline="middle"
                    >
                        {"Spin"}
                    </text>
                </svg>
            </div>
            <div class="absolute inset-0 pointer-events-none" style={pointer_style}>
                <svg viewBox={format!("0 0 {} {}", VIEW_SIZE, VIEW_SIZE)} class="w-full h-full">
                    <path
                        d={format!("M {c} 32 L {l} 2 L {r} 2 Z", c = center, l = center - 14.0, r = center + 14.0)}
                        fill={if props.is_spinning { "#ffd700" } else { "#f59e0b" }}
                        stroke="#e69500"
                        stroke-width="1.5"
                    />
                </svg>
            </div>
        </div>
    }
}
