//! ST7789 panel, landscape, over SPI with DMA.

use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::options::{
    ColorInversion,
    Orientation,
    Rotation,
};
use esp_hal::{
    Async,
    dma::{
        DmaRxBuf,
        DmaTxBuf,
    },
    dma_buffers,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    spi::master::Spi,
    time::Rate,
};

use crate::{
    badge::DisplayResources,
    config::{
        DISPLAY_HEIGHT_PX,
        DISPLAY_WIDTH_PX,
    },
};

/// Size of the DMA buffers and of the mipidsi pixel buffer.
const BUFFER_LEN: usize = 32000;

/// Width of the ST7789 frame memory. The glass is narrower and sits centred.
const CONTROLLER_COLUMNS: u32 = 240;

/// The glass is mounted portrait; `DISPLAY_*_PX` describe it as drawn.
const LANDSCAPE: bool = DISPLAY_WIDTH_PX > DISPLAY_HEIGHT_PX;
const NATIVE_WIDTH: u32 = if LANDSCAPE { DISPLAY_HEIGHT_PX } else { DISPLAY_WIDTH_PX };
const NATIVE_HEIGHT: u32 = if LANDSCAPE { DISPLAY_WIDTH_PX } else { DISPLAY_HEIGHT_PX };

const _: () = assert!(NATIVE_WIDTH <= CONTROLLER_COLUMNS);

const COLUMN_OFFSET: u16 = ((CONTROLLER_COLUMNS - NATIVE_WIDTH) / 2) as u16;

fn orientation() -> Orientation {
    let rotation = if LANDSCAPE {
        Rotation::Deg90
    } else {
        Rotation::Deg0
    };
    Orientation::new().rotate(rotation)
}

type SpiInterface<'a> = mipidsi::interface::SpiInterface<
    'a,
    ExclusiveDevice<esp_hal::spi::master::SpiDmaBus<'a, Async>, Output<'a>, esp_hal::delay::Delay>,
    Output<'a>,
>;

/// The badge display. Implements `DrawTarget<Color = Rgb565>`, so a
/// [`ScreenRenderer`](crate::ScreenRenderer) can draw on it directly.
pub type Display<'a> = mipidsi::Display<SpiInterface<'a>, mipidsi::models::ST7789, Output<'a>>;

impl<'a> From<DisplayResources<'a>> for Display<'a> {
    fn from(res: DisplayResources<'a>) -> Self {
        let (rx_buffer, rx_descriptors, tx_buffer, tx_descriptors) = dma_buffers!(BUFFER_LEN);
        let dma_rx_buf = DmaRxBuf::new(rx_descriptors, rx_buffer).unwrap();
        let dma_tx_buf = DmaTxBuf::new(tx_descriptors, tx_buffer).unwrap();

        let mut delay = esp_hal::delay::Delay::new();

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        let mut rst = Output::new(res.rst, Level::Low, OutputConfig::default());
        rst.set_high();

        let spi = Spi::new(
            res.spi,
            esp_hal::spi::master::Config::default().with_frequency(Rate::from_mhz(80)),
        )
        .unwrap()
        .with_sck(res.sck)
        .with_mosi(res.mosi)
        .with_miso(res.miso)
        .with_dma(res.dma)
        .with_buffers(dma_rx_buf, dma_tx_buf)
        .into_async();

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi_device = ExclusiveDevice::new(spi, cs, delay).unwrap();

        let buffer = crate::mk_static!([u8; BUFFER_LEN], [0_u8; BUFFER_LEN]);
        let di = mipidsi::interface::SpiInterface::new(spi_device, dc, buffer);

        mipidsi::Builder::new(mipidsi::models::ST7789, di)
            .reset_pin(rst)
            .display_size(NATIVE_WIDTH as u16, NATIVE_HEIGHT as u16)
            .invert_colors(ColorInversion::Inverted)
            .orientation(orientation())
            .display_offset(COLUMN_OFFSET, 0)
            .init(&mut delay)
            .unwrap()
    }
}
