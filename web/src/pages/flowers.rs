use valentine_core::{Flower, FlowerField, FlowerShape, FlowEvent, Palette, TransitionAction};
use yew::prelude::*;

use crate::app::FlowHandle;
use crate::timers::ScheduledTimeline;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct FlowerCoverProps {
    pub seed: u64,
}

pub(crate) enum Msg {
    Wake,
}

/// Inline placement for one flower inside a `rows` x `cols` cover.
fn flower_style(flower: &Flower, rows: u8, cols: u8) -> String {
    let left = f32::from(flower.col) / f32::from(cols) * 100.;
    let top = f32::from(flower.row) / f32::from(rows) * 100.;
    format!(
        "left: calc({left}% + {x:.1}px); top: calc({top}% + {y:.1}px); width: {w}%; height: {h}%; \
         z-index: {z}; animation-delay: {delay}ms; --scale: {scale:.2}; --rotation: {rot:.0}deg;",
        x = flower.x_offset,
        y = flower.y_offset,
        w = 100. / f32::from(cols),
        h = 100. / f32::from(rows),
        z = flower.row,
        delay = flower.delay_ms,
        scale = flower.scale,
        rot = flower.rotation,
    )
}

fn flower_class(flower: &Flower) -> Classes {
    classes!(
        "flower",
        match flower.shape {
            FlowerShape::Daisy => "daisy",
            FlowerShape::Peony => "peony",
            FlowerShape::Tropical => "tropical",
        },
        match flower.palette {
            Palette::Pink => "pink",
            Palette::Red => "red",
            Palette::Yellow => "yellow",
        }
    )
}

pub(crate) struct FlowerCover {
    field: FlowerField,
    script: ScheduledTimeline<TransitionAction>,
    flow: FlowHandle,
}

impl Component for FlowerCover {
    type Message = Msg;
    type Properties = FlowerCoverProps;

    fn create(ctx: &Context<Self>) -> Self {
        let field = FlowerField::generate(ctx.props().seed);
        let script = ScheduledTimeline::start(field.timeline(), ctx.link().callback(|()| Msg::Wake));
        log::debug!("flower cover completes in {}ms", field.completion_ms());
        Self {
            field,
            script,
            flow: FlowHandle::from_scope(ctx.link()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Wake => {
                for TransitionAction::Covered in self.script.due() {
                    self.flow.send(FlowEvent::TransitionFinished);
                }
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let (rows, cols) = (self.field.rows(), self.field.cols());
        html! {
            <div class="flowers">
                {
                    for self.field.flowers().iter().map(|flower| html! {
                        <div
                            key={format!("{}-{}", flower.row, flower.col)}
                            class={flower_class(flower)}
                            style={flower_style(flower, rows, cols)}
                        />
                    })
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_places_flower_on_its_grid_slot() {
        let field = FlowerField::generate(9);
        let flower = field
            .flowers()
            .iter()
            .find(|flower| flower.row == 6 && flower.col == 4)
            .unwrap();

        let style = flower_style(flower, field.rows(), field.cols());
        assert!(style.starts_with("left: calc(50% + "));
        assert!(style.contains("top: calc(50% + "));
        assert!(style.contains(&format!("animation-delay: {}ms", flower.delay_ms)));
    }
}
