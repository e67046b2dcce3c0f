use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use valentine_core as flow;
use valentine_core::{CellInput, CompletionCheck, Coord2, EntryPolicy, FlowEvent, GRID_SIZE};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::app::FlowHandle;
use crate::utils::*;

const SCORE_STEP_MS: u32 = 30;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct SudokuProps {
    pub recipient: AttrValue,
    pub policy: EntryPolicy,
    pub check_debounce_ms: u32,
    pub score_base: u32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Select(Coord2),
    Input(CellInput),
    CheckCompletion,
    Tick,
    ScoreStep,
    TogglePause,
    Continue,
}

/// CSS classes for one grid cell.
fn cell_class_names(
    cell: flow::SudokuCell,
    (row, col): Coord2,
    selected: bool,
    complete: bool,
) -> Vec<&'static str> {
    let mut names = vec!["cell"];
    names.push(if cell.is_initial { "given" } else { "entry" });
    if !cell.is_valid {
        names.push("invalid");
    }
    if selected {
        names.push("selected");
    }
    if complete {
        names.push("solved");
    }
    if (col + 1) % 3 == 0 && col + 1 != GRID_SIZE {
        names.push("edge-right");
    }
    if (row + 1) % 3 == 0 && row + 1 != GRID_SIZE {
        names.push("edge-bottom");
    }
    names
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    coords: Coord2,
    cell: flow::SudokuCell,
    selected: bool,
    complete: bool,
    onselect: Callback<Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        coords,
        cell,
        selected,
        complete,
        onselect,
    } = props.clone();

    let class = cell_class_names(cell, coords, selected, complete)
        .into_iter()
        .collect::<Classes>();
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{:?} clicked", coords);
        onselect.emit(coords);
    });

    html! {
        <td {class} {onclick}>
            { (!cell.is_empty()).then(|| html! { cell.value }) }
        </td>
    }
}

pub(crate) struct SudokuPage {
    board: flow::SudokuBoard,
    flow: FlowHandle,
    pending_check: Option<Timeout>,
    ticker: Option<Interval>,
    score_animation: Option<Interval>,
    _keys: EventListener,
}

impl SudokuPage {
    fn is_timed(ctx: &Context<Self>) -> bool {
        matches!(ctx.props().policy, EntryPolicy::Immediate)
    }

    /// Re-arms the settle delay, replacing (and so clearing) any earlier one.
    fn schedule_check(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.pending_check = Some(Timeout::new(ctx.props().check_debounce_ms, move || {
            link.send_message(Msg::CheckCompletion)
        }));
    }

    fn on_solved(&mut self, ctx: &Context<Self>) {
        log::info!("puzzle solved");
        celebrate();
        self.ticker.take();
        if Self::is_timed(ctx) {
            let link = ctx.link().clone();
            self.score_animation = Some(Interval::new(SCORE_STEP_MS, move || {
                link.send_message(Msg::ScoreStep)
            }));
        }
    }

    fn stats_view(&self, ctx: &Context<Self>) -> Html {
        if !Self::is_timed(ctx) {
            return html! {};
        }

        let clock = self.board.clock();
        let on_pause = ctx.link().callback(|_| Msg::TogglePause);
        html! {
            <nav class="stats">
                <aside>{ format!("Mistakes: {}", self.board.mistakes()) }</aside>
                <aside>{ format_clock(clock.elapsed_secs()) }</aside>
                <aside>{ format!("Score: {}", clock.score()) }</aside>
                <button onclick={on_pause} disabled={self.board.is_complete()}>
                    { if clock.is_paused() { "Resume" } else { "Pause" } }
                </button>
            </nav>
        }
    }

    fn grid_view(&self, ctx: &Context<Self>) -> Html {
        let complete = self.board.is_complete();
        let selection = self.board.selected();
        let onselect = ctx.link().callback(Msg::Select);

        html! {
            <table class={classes!(complete.then_some("complete"))}>
                {
                    for (0..GRID_SIZE).map(|row| html! {
                        <tr>
                            {
                                for (0..GRID_SIZE).map(|col| {
                                    let coords = (row, col);
                                    let cell = self.board.cell_at(coords);
                                    let selected = selection == Some(coords);
                                    let onselect = onselect.clone();
                                    html! {
                                        <CellView {coords} {cell} {selected} {complete} {onselect}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }

    fn numpad_view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="numpad">
                {
                    for [1, 2, 3, 4, 5, 6, 7, 8, 9, 0].into_iter().filter_map(CellInput::from_value).map(|input| {
                        let onclick = ctx.link().callback(move |_| Msg::Input(input));
                        let (class, label) = match input {
                            CellInput::Set(value) => ("digit", value.to_string()),
                            CellInput::Clear => ("clear", "⟲".to_string()),
                        };
                        html! { <button {class} {onclick}>{label}</button> }
                    })
                }
            </div>
        }
    }

    fn success_view(&self, ctx: &Context<Self>) -> Html {
        if !self.board.is_complete() {
            return html! {};
        }

        let recipient = &ctx.props().recipient;
        let on_continue = ctx.link().callback(|_| Msg::Continue);
        html! {
            <Modal>
                <div class="modal">
                    <article>
                        <h3>{ format!("Great Job, {}!", recipient) }</h3>
                        <p>{"You solved it! That wasn't so hard, right?"}</p>
                        <button onclick={on_continue}>{"Continue Journey"}</button>
                    </article>
                </div>
            </Modal>
        }
    }
}

impl Component for SudokuPage {
    type Message = Msg;
    type Properties = SudokuProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let keys = {
            let link = ctx.link().clone();
            EventListener::new(&gloo::utils::window(), "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if let Some(input) = CellInput::from_key(&event.key()) {
                    link.send_message(Msg::Input(input));
                }
            })
        };
        let ticker = Self::is_timed(ctx).then(|| {
            let link = ctx.link().clone();
            Interval::new(1000, move || link.send_message(Msg::Tick))
        });

        Self {
            board: flow::SudokuBoard::new(props.policy).with_score_base(props.score_base),
            flow: FlowHandle::from_scope(ctx.link()),
            pending_check: None,
            ticker,
            score_animation: None,
            _keys: keys,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Select(coords) => self.board.select_cell(coords).is_ok(),
            Input(input) => {
                let updated = self.board.apply_input(input).has_update();
                if updated {
                    self.schedule_check(ctx);
                }
                updated
            }
            CheckCompletion => {
                self.pending_check = None;
                match self.board.check_completion() {
                    CompletionCheck::JustSolved => {
                        self.on_solved(ctx);
                        true
                    }
                    CompletionCheck::Incomplete | CompletionCheck::AlreadySolved => false,
                }
            }
            Tick => self.board.clock_mut().tick(),
            ScoreStep => {
                let stepped = self.board.clock_mut().step_score();
                if !stepped {
                    self.score_animation = None;
                }
                stepped
            }
            TogglePause => {
                let paused = self.board.clock_mut().toggle_pause();
                log::debug!("paused: {}", paused);
                true
            }
            Continue => {
                self.flow.send(FlowEvent::PuzzleContinued);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page sudoku">
                <header>
                    <h2>{"Just a warm up..."}</h2>
                    <p>{"Fill in the missing numbers to continue!"}</p>
                </header>
                { self.stats_view(ctx) }
                { self.grid_view(ctx) }
                { self.numpad_view(ctx) }
                { self.success_view(ctx) }
            </div>
        }
    }
}
