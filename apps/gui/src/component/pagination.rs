use super::StatefulComponent;
use catalog::PageToken;
use egui::Widget;
use egui_i18n::tr;

/// Prev/next arrows around the page window.
#[derive(Default)]
pub struct Pagination;

pub struct PaginationProps<'a> {
    pub current: u32,
    pub total: u32,
    pub tokens: &'a [PageToken],
}

pub struct PaginationOutput {
    pub events: Vec<PaginationEvent>,
}

#[derive(Debug, PartialEq)]
pub enum PaginationEvent {
    PageSelected(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Previous,
    Next,
}

/// Page an arrow leads to, `None` when the arrow sits at the edge
fn step_target(current: u32, total: u32, step: Step) -> Option<u32> {
    match step {
        Step::Previous if current > 1 => Some(current - 1),
        Step::Next if current < total => Some(current + 1),
        _ => None,
    }
}

impl StatefulComponent for Pagination {
    type Props<'a> = PaginationProps<'a>;
    type Output = PaginationOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = Vec::new();
        let PaginationProps {
            current,
            total,
            tokens,
        } = props;

        ui.horizontal(|ui| {
            let prev_target = step_target(current, total, Step::Previous);
            let prev = ui
                .add_enabled(prev_target.is_some(), egui::Button::new("‹"))
                .on_hover_text(tr!("pagination-previous"));
            if let Some(page) = prev_target.filter(|_| prev.clicked()) {
                events.push(PaginationEvent::PageSelected(page));
            }

            for token in tokens {
                match token.page() {
                    Some(page) => {
                        let is_current = page == current;
                        if egui::Button::new(page.to_string())
                            .selected(is_current)
                            .ui(ui)
                            .clicked()
                            && !is_current
                        {
                            events.push(PaginationEvent::PageSelected(page));
                        }
                    }
                    None => {
                        ui.weak("…");
                    }
                }
            }

            let next_target = step_target(current, total, Step::Next);
            let next = ui
                .add_enabled(next_target.is_some(), egui::Button::new("›"))
                .on_hover_text(tr!("pagination-next"));
            if let Some(page) = next_target.filter(|_| next.clicked()) {
                events.push(PaginationEvent::PageSelected(page));
            }
        });

        PaginationOutput { events }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use catalog::page_window;
    use rstest::rstest;

    #[rstest]
    #[case(1, 3, Step::Previous, None)]
    #[case(2, 3, Step::Previous, Some(1))]
    #[case(3, 3, Step::Previous, Some(2))]
    #[case(1, 3, Step::Next, Some(2))]
    #[case(2, 3, Step::Next, Some(3))]
    #[case(3, 3, Step::Next, None)]
    #[case(1, 1, Step::Next, None)]
    #[case(1, 0, Step::Previous, None)]
    #[case(1, 0, Step::Next, None)]
    fn test_step_target(
        #[case] current: u32,
        #[case] total: u32,
        #[case] step: Step,
        #[case] expected: Option<u32>,
    ) {
        assert_eq!(step_target(current, total, step), expected);
    }

    #[test]
    fn test_render_without_input_emits_nothing() {
        let ctx = crate::ui::test_context();
        let tokens = page_window(5, 12);
        let mut pagination = Pagination;
        let mut events = vec![PaginationEvent::PageSelected(0)];

        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let props = PaginationProps {
                    current: 5,
                    total: 12,
                    tokens: &tokens,
                };
                events = pagination.render(ui, props).events;
            });
        });

        assert!(events.is_empty());
    }
}
