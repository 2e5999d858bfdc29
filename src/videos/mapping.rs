//! Which demo recording belongs on which slide.

/// A video expected on the slide at `slide_index` (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSlot<'a> {
    pub slide_index: usize,
    pub file_name: &'a str,
}

impl<'a> VideoSlot<'a> {
    pub const fn new(slide_index: usize, file_name: &'a str) -> Self {
        Self {
            slide_index,
            file_name,
        }
    }
}

/// Slots in processing order.
///
/// Indices are positions in the built deck and do not always line up with
/// the slide whose caption names the same recording.
pub const VIDEO_SLOTS: &[VideoSlot<'static>] = &[
    VideoSlot::new(2, "01-flujo-paciente-overview.mp4"),
    VideoSlot::new(6, "02-login-admin.mp4"),
    VideoSlot::new(7, "03-login-usuario-general.mp4"),
    VideoSlot::new(8, "04-dashboard-overview.mp4"),
    VideoSlot::new(9, "05-cargar-paciente-form.mp4"),
    VideoSlot::new(10, "06-cargar-paciente-servicios.mp4"),
    VideoSlot::new(11, "07-cargar-paciente-toggle.mp4"),
    VideoSlot::new(12, "08-cargar-paciente-submit.mp4"),
    VideoSlot::new(13, "09-cola-pacientes-overview.mp4"),
    VideoSlot::new(14, "10-habilitar-paciente.mp4"),
    VideoSlot::new(15, "11-permiso-denegado.mp4"),
    VideoSlot::new(16, "12-llamar-paciente.mp4"),
    VideoSlot::new(17, "13-registrar-atencion.mp4"),
    VideoSlot::new(18, "14-filtros-basicos.mp4"),
    VideoSlot::new(19, "15-filtros-multiples.mp4"),
    VideoSlot::new(20, "16-pantalla-publica-overview.mp4"),
    VideoSlot::new(21, "17-pantalla-realtime.mp4"),
    VideoSlot::new(22, "18-roles-y-permisos.mp4"),
    VideoSlot::new(23, "19-info-paciente.mp4"),
];
