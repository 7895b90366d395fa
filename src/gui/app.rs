use crate::config::Config;
use crate::gui::dial::{self, ClickDispatch, DialHost, DialState};
use crate::gui::theme::{self, Palette};
use crate::labels::Labels;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub state: Rc<RefCell<DialState>>,
    pub labels: Rc<Labels>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Click,
    Quit,
}

/// Adapts the drawing area to the dial's host contract.
struct GtkHost<'a> {
    area: &'a gtk::DrawingArea,
}

impl<'a> GtkHost<'a> {
    fn new(area: &'a gtk::DrawingArea) -> Self {
        Self { area }
    }
}

impl DialHost for GtkHost<'_> {
    // GTK never delivers clicks to an insensitive widget, so this only keeps the
    // base-then-dial ordering explicit; the Handled branch is not a live path today.
    fn pre_click(&mut self) -> ClickDispatch {
        if self.area.is_sensitive() {
            ClickDispatch::Unhandled
        } else {
            ClickDispatch::Handled
        }
    }

    fn set_description(&mut self, description: &str) {
        self.area
            .update_property(&[gtk::accessible::Property::Description(description)]);
    }

    fn queue_draw(&mut self) {
        self.area.queue_draw();
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = Config;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Speed Dial"),
            set_default_size: (width, height),
            add_css_class: "speed-dial-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "speed-dial-area",

                add_controller = gtk::GestureClick {
                    set_button: gtk::gdk::BUTTON_PRIMARY,
                    connect_released[sender] => move |_, _, _, _| {
                        sender.input(AppMsg::Click);
                    }
                }
            }
        }
    }

    fn init(
        config: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        theme::load_css();

        let (width, height) = (config.window.width, config.window.height);
        let palette = Palette::from_config(&config.palette);
        let labels = Rc::new(Labels::with_overrides(&config.labels));

        let model = AppModel {
            state: Rc::new(RefCell::new(DialState::new(palette))),
            labels,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        // radius is only ever recomputed here, never from the draw func
        let state_resize = model.state.clone();
        widgets.drawing_area.connect_resize(move |_, w, h| {
            state_resize.borrow_mut().on_size_changed(w, h);
        });

        let state_draw = model.state.clone();
        let labels_draw = model.labels.clone();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = dial::draw(&mut &*cr, &mut state_draw.borrow_mut(), &*labels_draw) {
                log::error!("Drawing error: {}", e);
            }
        });

        model
            .state
            .borrow_mut()
            .describe(&mut GtkHost::new(&model.drawing_area), &*model.labels);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Click => {
                let mut host = GtkHost::new(&self.drawing_area);
                self.state.borrow_mut().on_click(&mut host, &*self.labels);
            }
            AppMsg::Quit => {
                log::info!("Quitting");
                relm4::main_application().quit();
            }
        }
    }
}
