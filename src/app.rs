use crate::api::{
    ApiError, DicomDecodeResponse, HttpBackend, ImagingBackend, PlateDetectResponse, UploadFile,
    WindowAdjustRequest, WindowAdjustResponse,
};
use crate::components::workspace_toggle;
use crate::config::Config;
use crate::flows::{dicom, plate, AdjustTicket, DicomFlow, PlateFlow};
use crate::message::Message;
use crate::model::{ValidationError, Workspace};
use crate::views::{dicom_panel, plate_panel};
use iced::widget::{column, container};
use iced::{application, Alignment, Element, Length, Task, Theme};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use std::path::PathBuf;
use std::sync::Arc;

const APP_TITLE: &str = "VisionDesk";
const PLATE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
const DICOM_EXTENSIONS: &[&str] = &["dcm"];

pub fn run(config: Config) -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    log::info!("Using imaging server at {}", config.server);
    let backend: Arc<dyn ImagingBackend> = Arc::new(HttpBackend::new(&config.server));

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run_with(move || (App::new(config, backend), Task::none()))
}

pub struct App {
    config: Config,
    backend: Arc<dyn ImagingBackend>,
    workspace: Workspace,
    plate: PlateFlow,
    dicom: DicomFlow,
}

impl App {
    pub fn new(config: Config, backend: Arc<dyn ImagingBackend>) -> Self {
        Self {
            workspace: config.workspace.into(),
            config,
            backend,
            plate: PlateFlow::default(),
            dicom: DicomFlow::default(),
        }
    }

    pub fn workspace(&self) -> Workspace {
        self.workspace
    }

    pub fn plate(&self) -> &PlateFlow {
        &self.plate
    }

    pub fn dicom(&self) -> &DicomFlow {
        &self.dicom
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SetWorkspace(workspace) => {
                self.workspace = workspace;
                Task::none()
            }
            Message::AlertClosed => Task::none(),

            Message::PickPlateImage => Task::perform(
                pick_file("Images", PLATE_EXTENSIONS),
                Message::PlateImagePicked,
            ),
            Message::PlateImagePicked(path) => {
                self.plate.select(path);
                Task::none()
            }
            Message::SubmitPlate => match self.plate.submit(self.config.max_upload_bytes()) {
                Ok(path) => {
                    log::info!("Submitting {} for plate detection", path.display());
                    Task::perform(
                        detect_plate(self.backend.clone(), path),
                        Message::PlateDetected,
                    )
                }
                Err(err) => alert(&err, plate::MISSING_FILE_ALERT),
            },
            Message::PlateDetected(result) => {
                self.plate.finish(result);
                Task::none()
            }

            Message::PickDicomFile => Task::perform(
                pick_file("DICOM", DICOM_EXTENSIONS),
                Message::DicomFilePicked,
            ),
            Message::DicomFilePicked(path) => {
                self.dicom.select(path);
                Task::none()
            }
            Message::SubmitDicom => match self.dicom.submit(self.config.max_upload_bytes()) {
                Ok((path, ticket)) => {
                    log::info!("Submitting {} for DICOM decoding", path.display());
                    Task::perform(
                        process_dicom(self.backend.clone(), path),
                        move |result| Message::DicomLoaded(ticket, result),
                    )
                }
                Err(err) => alert(&err, dicom::MISSING_FILE_ALERT),
            },
            Message::DicomLoaded(ticket, result) => {
                self.dicom.finish_load(ticket, result);
                Task::none()
            }
            Message::WindowCenterChanged(center) => self.adjust_window(Some(center), None),
            Message::WindowWidthChanged(width) => self.adjust_window(None, Some(width)),
            Message::WindowAdjusted(ticket, result) => {
                self.dicom.finish_adjust(ticket, result);
                Task::none()
            }
        }
    }

    fn adjust_window(&mut self, center: Option<f64>, width: Option<f64>) -> Task<Message> {
        match self.window_request(center, width) {
            Some((ticket, request)) => Task::perform(
                render_window(self.backend.clone(), request),
                move |result| Message::WindowAdjusted(ticket, result),
            ),
            None => Task::none(),
        }
    }

    fn window_request(
        &mut self,
        center: Option<f64>,
        width: Option<f64>,
    ) -> Option<(AdjustTicket, WindowAdjustRequest)> {
        let current = self.dicom.loaded()?.params;
        self.dicom.adjust(
            center.unwrap_or(current.center),
            width.unwrap_or(current.width),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let panel = match self.workspace {
            Workspace::Plate => plate_panel(&self.plate),
            Workspace::Dicom => dicom_panel(&self.dicom),
        };

        column![
            workspace_toggle(self.workspace),
            container(panel).width(Length::Fill).height(Length::Fill),
        ]
        .padding(20)
        .spacing(20)
        .align_x(Alignment::Start)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

async fn pick_file(kind: &'static str, extensions: &'static [&'static str]) -> Option<PathBuf> {
    AsyncFileDialog::new()
        .add_filter(kind, extensions)
        .add_filter("All files", &["*"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

async fn detect_plate(
    backend: Arc<dyn ImagingBackend>,
    path: PathBuf,
) -> Result<PlateDetectResponse, ApiError> {
    let file = UploadFile::read(&path)?;
    backend.detect_plate(file).await
}

async fn process_dicom(
    backend: Arc<dyn ImagingBackend>,
    path: PathBuf,
) -> Result<DicomDecodeResponse, ApiError> {
    let file = UploadFile::read(&path)?;
    backend.process_dicom(file).await
}

async fn render_window(
    backend: Arc<dyn ImagingBackend>,
    request: WindowAdjustRequest,
) -> Result<WindowAdjustResponse, ApiError> {
    backend.adjust_window(request).await
}

fn alert(err: &ValidationError, missing_file_text: &str) -> Task<Message> {
    let description = match err {
        ValidationError::NoFileSelected => missing_file_text.to_string(),
        other => other.to_string(),
    };
    log::warn!("Submit rejected: {description}");

    Task::perform(
        async move {
            AsyncMessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title(APP_TITLE)
                .set_description(description)
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
        },
        |_| Message::AlertClosed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OutcomePanel, WindowParameters};
    use async_trait::async_trait;
    use serde_json::json;
    use std::io::Write;
    use std::sync::Mutex;

    const DECODED: &str = "data:image/jpeg;base64,/9j/4A==";

    struct OfflineBackend;

    #[async_trait]
    impl ImagingBackend for OfflineBackend {
        async fn process_dicom(&self, _file: UploadFile) -> Result<DicomDecodeResponse, ApiError> {
            Err(ApiError::Transport("offline".to_string()))
        }

        async fn adjust_window(
            &self,
            _request: WindowAdjustRequest,
        ) -> Result<WindowAdjustResponse, ApiError> {
            Err(ApiError::Transport("offline".to_string()))
        }

        async fn detect_plate(&self, _file: UploadFile) -> Result<PlateDetectResponse, ApiError> {
            Err(ApiError::Transport("offline".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingBackend {
        adjustments: Mutex<Vec<WindowAdjustRequest>>,
    }

    #[async_trait]
    impl ImagingBackend for RecordingBackend {
        async fn process_dicom(&self, _file: UploadFile) -> Result<DicomDecodeResponse, ApiError> {
            Err(ApiError::Transport("not recorded".to_string()))
        }

        async fn adjust_window(
            &self,
            request: WindowAdjustRequest,
        ) -> Result<WindowAdjustResponse, ApiError> {
            self.adjustments.lock().unwrap().push(request);
            Ok(WindowAdjustResponse {
                success: true,
                error: None,
                image: Some("data:image/jpeg;base64,QUJD".to_string()),
            })
        }

        async fn detect_plate(&self, _file: UploadFile) -> Result<PlateDetectResponse, ApiError> {
            Err(ApiError::Transport("not recorded".to_string()))
        }
    }

    fn load_study(app: &mut App) {
        let dir = std::env::temp_dir().join(format!("visiondesk-app-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("head.dcm");
        std::fs::File::create(&path).unwrap().write_all(b"DICM").unwrap();

        let _ = app.update(Message::DicomFilePicked(Some(path)));
        let (_, ticket) = app.dicom.submit(app.config.max_upload_bytes()).unwrap();
        let response = serde_json::from_value(json!({
            "success": true,
            "image": DECODED,
            "metadata": { "modality": "CT", "rows": 512, "columns": 512 },
            "window_center": 40.0,
            "window_width": 400.0,
            "min_value": -1000.0,
            "max_value": 3000.0
        }))
        .unwrap();
        let _ = app.update(Message::DicomLoaded(ticket, Ok(response)));
    }

    fn app() -> App {
        App::new(Config::default(), Arc::new(OfflineBackend))
    }

    #[test]
    fn starts_on_configured_workspace() {
        let config = Config {
            workspace: crate::config::StartWorkspace::Dicom,
            ..Config::default()
        };
        let app = App::new(config, Arc::new(OfflineBackend));
        assert_eq!(app.workspace(), Workspace::Dicom);
    }

    #[test]
    fn workspace_toggle_keeps_flow_state() {
        let mut app = app();
        let _ = app.update(Message::PlateDetected(Err(ApiError::Transport(
            "offline".to_string(),
        ))));
        let _ = app.update(Message::SetWorkspace(Workspace::Dicom));
        let _ = app.update(Message::SetWorkspace(Workspace::Plate));

        assert_eq!(app.workspace(), Workspace::Plate);
        assert!(app.plate().panel().failure().is_some());
    }

    #[test]
    fn submit_without_selection_leaves_panels_untouched() {
        let mut app = app();
        let _ = app.update(Message::SubmitPlate);
        let _ = app.update(Message::SubmitDicom);

        assert!(matches!(app.plate().panel(), OutcomePanel::Hidden));
        assert!(matches!(app.dicom().panel(), OutcomePanel::Hidden));
    }

    #[tokio::test]
    async fn each_slider_keeps_the_other_value() {
        let backend = Arc::new(RecordingBackend::default());
        let mut app = App::new(Config::default(), backend.clone());
        load_study(&mut app);

        let _ = app.update(Message::WindowCenterChanged(100.0));
        assert_eq!(
            app.dicom().loaded().unwrap().params,
            WindowParameters::new(100.0, 400.0)
        );
        let _ = app.update(Message::WindowWidthChanged(200.0));
        assert_eq!(
            app.dicom().loaded().unwrap().params,
            WindowParameters::new(100.0, 200.0)
        );

        let (ticket, request) = app.window_request(None, Some(250.0)).unwrap();
        let result = render_window(backend.clone(), request).await;
        let _ = app.update(Message::WindowAdjusted(ticket, result));

        let sent = backend.adjustments.lock().unwrap().clone();
        assert_eq!(
            sent,
            vec![WindowAdjustRequest {
                image_data: DECODED.to_string(),
                window_center: 100.0,
                window_width: 250.0,
            }]
        );
        assert_eq!(
            app.dicom().panel().success().unwrap().image.source,
            "data:image/jpeg;base64,QUJD"
        );
        assert_eq!(app.dicom().loaded().unwrap().handle.as_str(), DECODED);
    }

    #[test]
    fn slider_before_load_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::WindowCenterChanged(120.0));
        assert!(app.dicom().loaded().is_none());
    }
}
