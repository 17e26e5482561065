use clap::Args;
use yew::prelude::*;

use crate::utils::js_random_seed;
use apagon_core as game;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Number of rows on the board
    #[arg(long, default_value_t = 2)]
    pub(crate) nrows: game::Coord,

    /// Number of columns on the board
    #[arg(long, default_value_t = 2)]
    pub(crate) ncols: game::Coord,

    /// Chance that any cell starts lit
    #[arg(long, default_value_t = 0.5)]
    pub(crate) chance: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,
}

impl BoardProps {
    pub(crate) fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new((self.nrows, self.ncols), self.chance)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Toggle(game::Coord2),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    lit: bool,
    on_toggle: Callback<()>,
}

/// A single light. Its look is driven entirely by `lit`, and presses are
/// reported upward with no payload, so a cell never learns where it sits.
#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps { lit, on_toggle } = props.clone();

    let class = cell_classes(lit);
    let onclick = Callback::from(move |_: MouseEvent| on_toggle.emit(()));

    html! {
        <td {class} {onclick}/>
    }
}

fn cell_classes(lit: bool) -> Classes {
    classes!("cell", lit.then_some("lit"))
}

/// Owns the grid and hands each cell its value plus a press callback
/// closed over that cell's coordinates.
#[derive(Debug)]
pub(crate) struct BoardView {
    game: game::Game,
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        use game::{GridGenerator, RandomGridGenerator, StartPolicy};

        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let grid =
            RandomGridGenerator::new(seed, StartPolicy::Independent).generate(props.game_config());
        Self {
            game: game::Game::new(grid),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Toggle(pos) => {
                log::debug!("toggle cell: {:?}", pos);
                self.game
                    .toggle(pos)
                    .map_or(false, |outcome| outcome.has_update())
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.game.has_won() {
            return html! {
                <h1 class="you-won">{ "You Won!" }</h1>
            };
        }

        let (nrows, ncols) = self.game.size();

        html! {
            <table class="apagon">
                {
                    for (0..nrows).map(|row| html! {
                        <tr>
                            {
                                for (0..ncols).map(|col| {
                                    let pos = (row, col);
                                    let lit = self.game.is_lit(pos);
                                    let on_toggle = ctx.link().callback(move |()| Msg::Toggle(pos));
                                    html! {
                                        <CellView {lit} {on_toggle}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}
